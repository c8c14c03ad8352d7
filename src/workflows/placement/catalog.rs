use super::domain::{Drive, DriveDraft, DriveId, DriveStatus, StatusFilter, ValidationError};

/// Errors surfaced by drive catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("drive {0} not found")]
    DriveNotFound(DriveId),
    #[error("drive status may not move from {from:?} to {to:?}")]
    TransitionBlocked { from: DriveStatus, to: DriveStatus },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Authoritative in-memory store of recruitment drives.
///
/// Newest first: `create` inserts at the head, so iteration order is the
/// dashboard's most-recent-drives order. Identifiers are one more than the
/// highest currently stored, so deleting the newest drive frees its id for
/// reuse.
#[derive(Debug, Default)]
pub struct DriveCatalog {
    drives: Vec<Drive>,
}

impl DriveCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft` and store it as a new drive. Nothing is written when
    /// validation fails.
    pub fn create(&mut self, draft: DriveDraft) -> Result<&Drive, CatalogError> {
        let drive = draft.into_drive(self.next_id())?;
        self.drives.insert(0, drive);
        Ok(&self.drives[0])
    }

    /// Replace every stored field of drive `id` with the validated draft.
    /// The drive keeps its id and position in iteration order.
    pub fn update(&mut self, id: DriveId, draft: DriveDraft) -> Result<&Drive, CatalogError> {
        let index = self.index_of(id)?;
        self.drives[index] = draft.into_drive(id)?;
        Ok(&self.drives[index])
    }

    /// Remove drive `id` and return it. Application records pointing at the
    /// drive are unaffected; they carry their own company and position.
    pub fn delete(&mut self, id: DriveId) -> Result<Drive, CatalogError> {
        let index = self.index_of(id)?;
        Ok(self.drives.remove(index))
    }

    pub fn set_status(&mut self, id: DriveId, status: DriveStatus) -> Result<&Drive, CatalogError> {
        let index = self.index_of(id)?;
        let current = self.drives[index].status;
        if !current.transition_allowed(status) {
            return Err(CatalogError::TransitionBlocked {
                from: current,
                to: status,
            });
        }
        self.drives[index].status = status;
        Ok(&self.drives[index])
    }

    /// Overwrite the cached application counter. The ledger stays the
    /// authority on who actually applied.
    pub fn set_applications(
        &mut self,
        id: DriveId,
        applications: u32,
    ) -> Result<&Drive, CatalogError> {
        let index = self.index_of(id)?;
        self.drives[index].applications = applications;
        Ok(&self.drives[index])
    }

    pub fn get(&self, id: DriveId) -> Option<&Drive> {
        self.drives.iter().find(|drive| drive.id == id)
    }

    /// All drives, newest first.
    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    /// Case-insensitive substring search over company and position, further
    /// narrowed by `filter`. An empty term matches every drive.
    pub fn search(&self, term: &str, filter: StatusFilter<DriveStatus>) -> Vec<&Drive> {
        let needle = term.to_lowercase();
        self.drives
            .iter()
            .filter(|drive| {
                (drive.company.to_lowercase().contains(&needle)
                    || drive.position.to_lowercase().contains(&needle))
                    && filter.admits(drive.status)
            })
            .collect()
    }

    fn next_id(&self) -> DriveId {
        DriveId(
            self.drives
                .iter()
                .map(|drive| drive.id.0)
                .max()
                .unwrap_or(0)
                + 1,
        )
    }

    fn index_of(&self, id: DriveId) -> Result<usize, CatalogError> {
        self.drives
            .iter()
            .position(|drive| drive.id == id)
            .ok_or(CatalogError::DriveNotFound(id))
    }
}
