use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::domain::{
    Company, CompanyDraft, CompanyId, CompanyStatus, StatusFilter, ValidationError,
};

/// Errors surfaced by company directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("company {0} not found")]
    CompanyNotFound(CompanyId),
    #[error("company status may not move from {from:?} to {to:?}")]
    TransitionBlocked { from: CompanyStatus, to: CompanyStatus },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Headline numbers for the company relations screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryMetrics {
    pub total: usize,
    pub active_partners: usize,
    /// Years since the earliest partnership on record, zero for an empty
    /// directory.
    pub years_partnering: i32,
}

/// Directory of partner companies. Same store shape as the drive catalog:
/// newest first, ids one past the highest stored.
#[derive(Debug, Default)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, draft: CompanyDraft) -> Result<&Company, DirectoryError> {
        let company = draft.into_company(self.next_id())?;
        self.companies.insert(0, company);
        Ok(&self.companies[0])
    }

    /// Replace every stored field of company `id` with the validated draft.
    pub fn update(&mut self, id: CompanyId, draft: CompanyDraft) -> Result<&Company, DirectoryError> {
        let index = self.index_of(id)?;
        self.companies[index] = draft.into_company(id)?;
        Ok(&self.companies[index])
    }

    pub fn delete(&mut self, id: CompanyId) -> Result<Company, DirectoryError> {
        let index = self.index_of(id)?;
        Ok(self.companies.remove(index))
    }

    pub fn set_status(
        &mut self,
        id: CompanyId,
        status: CompanyStatus,
    ) -> Result<&Company, DirectoryError> {
        let index = self.index_of(id)?;
        let current = self.companies[index].status;
        if !current.transition_allowed(status) {
            return Err(DirectoryError::TransitionBlocked {
                from: current,
                to: status,
            });
        }
        self.companies[index].status = status;
        Ok(&self.companies[index])
    }

    pub fn get(&self, id: CompanyId) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    /// All companies, newest first.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    /// Case-insensitive substring search over name and contact person,
    /// further narrowed by `filter`. An empty term matches every company.
    pub fn search(&self, term: &str, filter: StatusFilter<CompanyStatus>) -> Vec<&Company> {
        let needle = term.to_lowercase();
        self.companies
            .iter()
            .filter(|company| {
                (company.name.to_lowercase().contains(&needle)
                    || company.contact_person.to_lowercase().contains(&needle))
                    && filter.admits(company.status)
            })
            .collect()
    }

    pub fn metrics(&self, today: NaiveDate) -> DirectoryMetrics {
        let active_partners = self
            .companies
            .iter()
            .filter(|company| company.status == CompanyStatus::Active)
            .count();
        let years_partnering = self
            .companies
            .iter()
            .map(|company| company.partnership_since.year())
            .min()
            .map(|earliest| today.year() - earliest)
            .unwrap_or(0);
        DirectoryMetrics {
            total: self.companies.len(),
            active_partners,
            years_partnering,
        }
    }

    fn next_id(&self) -> CompanyId {
        CompanyId(
            self.companies
                .iter()
                .map(|company| company.id.0)
                .max()
                .unwrap_or(0)
                + 1,
        )
    }

    fn index_of(&self, id: CompanyId) -> Result<usize, DirectoryError> {
        self.companies
            .iter()
            .position(|company| company.id == id)
            .ok_or(DirectoryError::CompanyNotFound(id))
    }
}
