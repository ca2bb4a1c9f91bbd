//! List-view state for one entity: page cursor, search mode and selection.
//!
//! Each tab owns its own `RecordBrowser`; nothing here is shared between
//! entities. Every mutation re-lists the current page and clears the selection.

use common::pagination::{PageInfo, Pagination};

use crate::errors::ServiceError;
use crate::record_manager::{ManagedEntity, RecordManager};
use sea_orm::IntoActiveModel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowseMode {
    Paged,
    /// Substring filter active; all matches shown as a single page.
    Search(String),
}

pub struct RecordBrowser<E: ManagedEntity> {
    manager: RecordManager<E>,
    page_index: u64,
    page_size: u64,
    total_records: u64,
    rows: Vec<E::Model>,
    mode: BrowseMode,
    selected: Option<i32>,
}

impl<E> RecordBrowser<E>
where
    E: ManagedEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: Send,
{
    /// Empty browser; call `load` to fetch the first page.
    pub fn new(manager: RecordManager<E>, page_size: u64) -> Result<Self, ServiceError> {
        if page_size == 0 {
            return Err(ServiceError::Validation("page size must be positive".into()));
        }
        Ok(Self {
            manager,
            page_index: 0,
            page_size,
            total_records: 0,
            rows: Vec::new(),
            mode: BrowseMode::Paged,
            selected: None,
        })
    }

    pub fn rows(&self) -> &[E::Model] { &self.rows }
    pub fn page_index(&self) -> u64 { self.page_index }
    pub fn page_size(&self) -> u64 { self.page_size }
    pub fn total_records(&self) -> u64 { self.total_records }
    pub fn mode(&self) -> &BrowseMode { &self.mode }
    pub fn selected(&self) -> Option<i32> { self.selected }

    fn page_info(&self) -> PageInfo { PageInfo::new(self.page_index, self.page_size, self.total_records) }

    pub fn has_next(&self) -> bool {
        matches!(self.mode, BrowseMode::Paged) && self.page_info().has_next()
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.mode, BrowseMode::Paged) && self.page_info().has_prev()
    }

    pub fn total_pages(&self) -> u64 {
        match self.mode {
            BrowseMode::Paged => self.page_info().total_pages(),
            BrowseMode::Search(_) => 1,
        }
    }

    /// Status line shown under the table.
    pub fn page_label(&self) -> String {
        let current = match self.mode {
            BrowseMode::Paged => self.page_index + 1,
            BrowseMode::Search(_) => 1,
        };
        format!("Page {} of {} - Total Records: {}", current, self.total_pages(), self.total_records)
    }

    /// Re-list the current page, leaving search mode.
    pub async fn load(&mut self) -> Result<(), ServiceError> {
        self.show_page(self.page_index).await
    }

    /// Advance one page. Returns `false` without touching the database on the last page.
    pub async fn next_page(&mut self) -> Result<bool, ServiceError> {
        if !self.has_next() {
            return Ok(false);
        }
        self.show_page(self.page_index + 1).await?;
        Ok(true)
    }

    /// Go back one page. Returns `false` on page 0.
    pub async fn prev_page(&mut self) -> Result<bool, ServiceError> {
        if !self.has_prev() {
            return Ok(false);
        }
        self.show_page(self.page_index - 1).await?;
        Ok(true)
    }

    /// Show every record matching `term` as one virtual page; next/prev are
    /// disabled until `clear_search`.
    pub async fn search(&mut self, term: &str) -> Result<(), ServiceError> {
        let rows = self.manager.search(term).await?;
        self.total_records = rows.len() as u64;
        self.rows = rows;
        self.page_index = 0;
        self.selected = None;
        self.mode = BrowseMode::Search(term.to_string());
        Ok(())
    }

    pub async fn clear_search(&mut self) -> Result<(), ServiceError> {
        self.show_page(0).await
    }

    /// Select a row currently on screen, returning it so the form can be filled.
    pub fn select(&mut self, id: i32) -> Option<&E::Model> {
        let found = self.rows.iter().find(|m| E::id_of(m) == id);
        self.selected = found.map(|m| E::id_of(m));
        found
    }

    pub async fn add(&mut self, fields: E::Fields) -> Result<E::Model, ServiceError> {
        let created = self.manager.create(fields).await?;
        self.show_page(self.page_index).await?;
        Ok(created)
    }

    /// Overwrite the selected record in place; its id is kept.
    pub async fn edit_selected(&mut self, fields: E::Fields) -> Result<(), ServiceError> {
        let id = self.require_selection("edit")?;
        self.manager.update(id, fields).await?;
        self.show_page(self.page_index).await
    }

    pub async fn delete_selected(&mut self) -> Result<(), ServiceError> {
        let id = self.require_selection("delete")?;
        self.manager.delete(id).await?;
        self.show_page(self.page_index).await
    }

    fn require_selection(&self, action: &str) -> Result<i32, ServiceError> {
        self.selected
            .ok_or_else(|| ServiceError::Validation(format!("select a {} to {}", E::LABEL, action)))
    }

    // State is committed only after the fetch succeeds.
    async fn show_page(&mut self, index: u64) -> Result<(), ServiceError> {
        let mut page = self.manager.list(Pagination::new(index, self.page_size)).await?;
        if page.records.is_empty() && index > page.info.last_page() {
            page = self.manager.list(Pagination::new(page.info.last_page(), self.page_size)).await?;
        }
        self.page_index = page.info.page;
        self.total_records = page.info.total;
        self.rows = page.records;
        self.mode = BrowseMode::Paged;
        self.selected = None;
        Ok(())
    }
}
