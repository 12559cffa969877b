use crate::domain::article::{Article, StoredPost};

/// Normalise stored rows, dropping any the display shape cannot hold.
///
/// A blank slug or id in one row is logged and skipped so the rest of the
/// listing still renders.
pub fn normalise_rows<I, R>(rows: I) -> Vec<Article>
where
    I: IntoIterator<Item = R>,
    R: Into<StoredPost>,
{
    rows.into_iter()
        .filter_map(|row| {
            let row: StoredPost = row.into();
            let slug = row.slug.clone();
            Article::from_stored(row)
                .inspect_err(|err| tracing::warn!(%slug, error = %err, "skipping malformed post row"))
                .ok()
        })
        .collect()
}
