use chrono::{Datelike, Local, NaiveDate};

use crate::application::unit_of_work::CatalogUnitOfWork;

/// Entry point for every catalog read and write.
///
/// Cheap to clone; each clone shares the same store handles.
#[derive(Debug, Clone)]
pub struct CatalogService {
    pub(crate) uow: CatalogUnitOfWork,
    today: Option<NaiveDate>,
}

impl CatalogService {
    pub fn new(uow: CatalogUnitOfWork) -> Self {
        Self { uow, today: None }
    }

    /// Pins "today" so recency and open-ended year ranges are reproducible.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn unit_of_work(&self) -> &CatalogUnitOfWork {
        &self.uow
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub(crate) fn current_year(&self) -> i32 {
        self.today().year()
    }
}
