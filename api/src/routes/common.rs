//! Shared pagination surface for the list endpoints.

use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Select};
use serde::{Deserialize, Serialize};

use crate::services::error::ServiceError;

/// Hard cap on requested page size.
pub const MAX_PAGE_SIZE: u64 = 100;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Query parameters accepted by every paginated endpoint.
///
/// `page` is 1-based; `size` is capped at [`MAX_PAGE_SIZE`]. The `pageSize`
/// spelling is accepted as an alias for `size`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    #[serde(alias = "pageSize")]
    pub size: Option<u64>,
}

impl PageParams {
    /// Resolves defaults and bounds: page >= 1, 1 <= size <= 100.
    pub fn clamp(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let size = self
            .size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, size)
    }
}

/// Page envelope returned by every paginated endpoint.
///
/// `total_pages == ceil(total_items / size)`; a page past the end yields an
/// empty `data` with unchanged totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T: Serialize> {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub data: Vec<T>,
}

/// Executes a bounded SELECT plus a COUNT for one page of `select`.
pub async fn paginate<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    page: u64,
    size: u64,
) -> Result<PageResponse<E::Model>, ServiceError>
where
    E: EntityTrait,
    E::Model: Serialize + Send + Sync,
{
    let paginator = select.paginate(db, size);
    let total_items = paginator.num_items().await?;
    let total_pages = total_items.div_ceil(size);

    let data = if total_items == 0 || page > total_pages {
        Vec::new()
    } else {
        paginator.fetch_page(page - 1).await?
    };

    Ok(PageResponse {
        page,
        page_size: size,
        total_items,
        total_pages,
        data,
    })
}
