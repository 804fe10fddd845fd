use anyhow::Result;
use incident_tracker_core::{MAX_PAGE_SIZE, PageRequest, RowFilter};
use incident_tracker_storage::{IssueStore, RowStore};

use crate::open_storage;

pub(crate) async fn rows(
    database: Option<String>,
    filter: Option<String>,
    assignees: Vec<String>,
) -> Result<()> {
    let storage = open_storage(database).await?;
    let filter = RowFilter::new(filter, assignees);

    let rows = if filter.is_empty() {
        storage.list_rows().await?
    } else {
        let mut all = Vec::new();
        let mut page_number = 1;
        loop {
            let page =
                storage.list_rows_page(&filter, PageRequest::new(page_number, MAX_PAGE_SIZE)).await?;
            let has_next = page.has_next();
            all.extend(page.items);
            if !has_next {
                break;
            }
            page_number += 1;
        }
        all
    };

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub(crate) async fn issues(database: Option<String>) -> Result<()> {
    let storage = open_storage(database).await?;
    let issues = storage.list_issues().await?;
    println!("{}", serde_json::to_string_pretty(&issues)?);
    Ok(())
}
