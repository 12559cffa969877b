use super::ArticleDto;
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

pub const ELLIPSIS: &str = "...";
const SHOW_ALL_UP_TO: u32 = 7;

/// Entry of a pagination bar: a page number or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(u32),
    Ellipsis,
}

impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(number) => serializer.serialize_u32(*number),
            Self::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Page numbers to show for `current` out of `total` pages.
///
/// Up to seven pages are all listed. Beyond that the first and last pages are
/// always present, with a window of one page on each side of `current` and an
/// ellipsis standing in for each skipped run.
pub fn page_labels(total: u32, current: u32) -> Vec<PageLabel> {
    if total <= SHOW_ALL_UP_TO {
        return (1..=total).map(PageLabel::Page).collect();
    }

    let mut labels = vec![PageLabel::Page(1)];
    if current > 3 {
        labels.push(PageLabel::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    labels.extend((start..=end).map(PageLabel::Page));

    if current < total - 2 {
        labels.push(PageLabel::Ellipsis);
    }
    labels.push(PageLabel::Page(total));
    labels
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedArticles {
    pub articles: Vec<ArticleDto>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u32,
    /// Numbers and `"..."` markers for the pagination bar.
    #[schema(value_type = Vec<String>)]
    pub pages: Vec<PageLabel>,
    pub has_previous: bool,
    pub has_next: bool,
}
