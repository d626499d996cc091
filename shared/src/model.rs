use crate::config::CatalogConfig;
use crate::detail::DetailController;
use crate::list::ListController;

/// Core state. Each screen owns its controller exclusively; `None` means the
/// screen is not active.
#[derive(Debug, Default)]
pub struct Model {
    pub config: CatalogConfig,
    pub list: Option<ListController>,
    pub detail: Option<DetailController>,
}
