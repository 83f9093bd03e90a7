//! Scraping of the hosting status page into node tiers.
//!
//! The page carries two tables with the status class: default nodes first,
//! high performance nodes second. Each table holds a caption, a header and a
//! body of rows with four cells: node id, bot count, ping, status. The rest
//! of the crate only sees [`NodeTier`] and [`NodeStats`].

use scraper::{ElementRef, Html, Selector};

use crate::error::{ApiError, ApiResult, StatusTable};
use crate::types::{NodeStats, NodeTier, RawNodeStats};

/// CSS selector of the two node tables.
pub const STATUS_TABLE_SELECTOR: &str = "table.status-table";

/// Parse the status page into `[default, high performance]` tiers.
///
/// A missing table is an error: the layout is load-bearing and a change to
/// it must not produce a partial result.
pub fn parse_nodes(html: &str) -> ApiResult<[NodeTier; 2]> {
    let document = Html::parse_document(html);
    let sel = Selector::parse(STATUS_TABLE_SELECTOR).expect("static status table selector");
    let mut tables = document.select(&sel);

    let [default, high_performance] = StatusTable::ALL.map(|table| (table, tables.next()));

    let default = parse_table(default.0, default.1)?;
    let high_performance = parse_table(high_performance.0, high_performance.1)?;

    Ok([default, high_performance])
}

fn parse_table(table: StatusTable, element: Option<ElementRef<'_>>) -> ApiResult<NodeTier> {
    let Some(element) = element else {
        tracing::warn!("status page has no {table} nodes table");
        return Err(ApiError::MissingTable(table));
    };

    let caption = child_elements(element)
        .find(|child| child.value().name() == "caption")
        .map(|caption| text_content(caption).trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| table.label().to_string());

    let rows = child_elements(element)
        .find(|child| child.value().name() == "tbody")
        .map(|body| {
            child_elements(body)
                .filter(|row| row.value().name() == "tr")
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let stats = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| parse_row(table, index, row))
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(NodeTier {
        name: caption,
        stats,
    })
}

fn parse_row(table: StatusTable, index: usize, row: ElementRef<'_>) -> ApiResult<NodeStats> {
    let cells: Vec<String> = child_elements(row).map(text_content).collect();
    let [node_id, bot_count, ping, status] = match cells.as_slice() {
        [node_id, bot_count, ping, status, ..] => [node_id, bot_count, ping, status],
        _ => return Err(ApiError::MalformedRow { table, row: index }),
    };

    Ok(node_stats(node_id, bot_count, ping, status))
}

/// Build the stats of one node, sanitizing the status cell.
pub fn node_stats(node_id: &str, bot_count: &str, ping: &str, status: &str) -> NodeStats {
    let status = sanitize_status(status);
    NodeStats {
        node_id: node_id.to_string(),
        text: format!("Server #{node_id} is {status} ({ping}): {bot_count} bots online"),
        raw_stats: RawNodeStats {
            bot_count: bot_count.to_string(),
            ping: ping.to_string(),
            status,
        },
    }
}

/// Strip every newline, tab and space the page injects into the status cell.
pub fn sanitize_status(status: &str) -> String {
    status
        .chars()
        .filter(|c| !matches!(c, '\n' | '\t' | ' '))
        .collect()
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(caption: &str, rows: &[[&str; 4]]) -> String {
        let body: String = rows
            .iter()
            .map(|[id, bots, ping, status]| {
                format!("<tr><td>{id}</td><td>{bots}</td><td>{ping}</td><td>{status}</td></tr>")
            })
            .collect();
        format!(
            r#"<table class="table status-table">
                <caption>{caption}</caption>
                <thead><tr><th>Node</th><th>Bots</th><th>Ping</th><th>Status</th></tr></thead>
                <tbody>{body}</tbody>
            </table>"#
        )
    }

    fn page(tables: &[String]) -> String {
        format!(
            "<html><head><title>Status</title></head><body><h1>Status</h1>{}</body></html>",
            tables.concat()
        )
    }

    #[test]
    fn test_parse_two_tables() {
        let html = page(&[
            table(
                "Default",
                &[["1", "5", "12ms", " On line \n\t"], ["2", "40", "30ms", "Online"]],
            ),
            table("High Performance", &[["10", "3", "8ms", "\n\tOffline\n"]]),
        ]);

        let [default, high] = parse_nodes(&html).unwrap();
        assert_eq!(default.name, "Default");
        assert_eq!(default.stats.len(), 2);

        let first = &default.stats[0];
        assert_eq!(first.node_id, "1");
        assert_eq!(first.raw_stats.status, "Online");
        assert_eq!(first.raw_stats.ping, "12ms");
        assert_eq!(first.raw_stats.bot_count, "5");
        assert_eq!(first.text, "Server #1 is Online (12ms): 5 bots online");

        assert_eq!(high.name, "High Performance");
        assert_eq!(high.stats[0].raw_stats.status, "Offline");
        assert_eq!(high.stats[0].text, "Server #10 is Offline (8ms): 3 bots online");
    }

    #[test]
    fn test_missing_second_table_is_error() {
        let html = page(&[table("Default", &[["1", "5", "12ms", "Online"]])]);
        let err = parse_nodes(&html).unwrap_err();
        assert!(matches!(err, ApiError::MissingTable(StatusTable::HighPerformance)));
        assert!(err.to_string().contains("High Performance"));
    }

    #[test]
    fn test_missing_both_tables_reports_default() {
        let err = parse_nodes("<html><body><p>Maintenance</p></body></html>").unwrap_err();
        assert!(matches!(err, ApiError::MissingTable(StatusTable::Default)));
    }

    #[test]
    fn test_tables_without_class_are_ignored() {
        let html = format!(
            "<html><body><table><tbody><tr><td>x</td></tr></tbody></table>{}{}</body></html>",
            table("Default", &[]),
            table("High Performance", &[])
        );
        let [default, high] = parse_nodes(&html).unwrap();
        assert!(default.stats.is_empty());
        assert!(high.stats.is_empty());
    }

    #[test]
    fn test_short_row_is_error() {
        let broken = r#"<table class="status-table"><caption>Default</caption>
            <thead><tr><th>Node</th></tr></thead>
            <tbody><tr><td>1</td><td>5</td></tr></tbody></table>"#;
        let html = page(&[broken.to_string(), table("High Performance", &[])]);
        let err = parse_nodes(&html).unwrap_err();
        assert!(matches!(
            err,
            ApiError::MalformedRow {
                table: StatusTable::Default,
                row: 0
            }
        ));
    }

    #[test]
    fn test_empty_caption_falls_back_to_label() {
        let html = page(&[table("", &[]), table("  ", &[])]);
        let [default, high] = parse_nodes(&html).unwrap();
        assert_eq!(default.name, "Default");
        assert_eq!(high.name, "High Performance");
    }

    #[test]
    fn test_sanitize_status() {
        assert_eq!(sanitize_status(" On line \n\t"), "Online");
        assert_eq!(sanitize_status("Degraded"), "Degraded");
        assert_eq!(sanitize_status("\n\t \n"), "");
    }
}
