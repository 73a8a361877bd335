// SPDX-License-Identifier: MPL-2.0
//! In-memory article store backing the demo admin shell.
//!
//! Plays the role of the remote collection: it shapes a canonical
//! [`Query`] into a page of records plus the filtered total, and mutates
//! articles for the bulk actions. Shaping order is filter, search, sort,
//! then slice, so the reported count always reflects the filtered set.

use crate::browser::{
    CellValue, ColumnId, FilterValue, Query, Record, RecordId, RowAction, SortOrder,
};
use chrono::{DateTime, TimeZone, Utc};
use std::cmp::Ordering;
use std::fmt;

pub const TITLE: ColumnId = ColumnId::new("title");
pub const AUTHOR: ColumnId = ColumnId::new("author");
pub const STATUS: ColumnId = ColumnId::new("status");
pub const VIEWS: ColumnId = ColumnId::new("views");
pub const SEEN: ColumnId = ColumnId::new("seen");
pub const UPDATED_AT: ColumnId = ColumnId::new("updated_at");

/// Stable key of the per-row open action.
pub const OPEN_ACTION: &str = "open";

/// Publication state of one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Draft,
    Published,
    Archived,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Draft, Status::Published, Status::Archived];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Published => "published",
            Status::Archived => "archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub author: String,
    pub status: Status,
    pub views: i64,
    pub seen: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Store with a deterministic demo data set.
    #[must_use]
    pub fn seeded() -> Self {
        let titles: [(&str, &str, Status, i64); 23] = [
            ("Welcome tour", "Ada", Status::Published, 311),
            ("Quarterly roadmap", "Grace", Status::Draft, 12),
            ("Release notes 1.4", "Ada", Status::Published, 987),
            ("Holiday schedule", "Linus", Status::Archived, 54),
            ("Design tokens refresh", "Grace", Status::Draft, 3),
            ("Hiring update", "Margaret", Status::Published, 210),
            ("Incident review", "Linus", Status::Published, 450),
            ("Style guide", "Ada", Status::Draft, 31),
            ("Offsite recap", "Margaret", Status::Archived, 78),
            ("Billing changes", "Grace", Status::Published, 623),
            ("API deprecations", "Linus", Status::Published, 344),
            ("Onboarding checklist", "Ada", Status::Draft, 9),
            ("Security advisory", "Margaret", Status::Published, 1204),
            ("Support rotation", "Grace", Status::Archived, 41),
            ("Performance report", "Linus", Status::Published, 156),
            ("Brand assets", "Ada", Status::Archived, 67),
            ("Sprint retrospective", "Margaret", Status::Draft, 5),
            ("Database migration", "Grace", Status::Published, 289),
            ("Accessibility audit", "Linus", Status::Draft, 18),
            ("Press release", "Ada", Status::Published, 734),
            ("Team charter", "Margaret", Status::Draft, 22),
            ("Pricing experiment", "Grace", Status::Published, 501),
            ("Changelog archive", "Linus", Status::Archived, 93),
        ];

        let articles = titles
            .into_iter()
            .enumerate()
            .map(|(index, (title, author, status, views))| Article {
                id: format!("a-{:03}", index + 1),
                title: title.to_string(),
                author: author.to_string(),
                status,
                views,
                seen: false,
                updated_at: Utc
                    .with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
                    .unwrap()
                    + chrono::Duration::hours(index as i64 * 7),
            })
            .collect();

        Self { articles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Shapes `query` into the visible page and the filtered total.
    #[must_use]
    pub fn query(&self, query: &Query) -> (Vec<Record>, usize) {
        let mut matches: Vec<&Article> = self
            .articles
            .iter()
            .filter(|article| matches_filters(article, query))
            .collect();

        sort_articles(&mut matches, query.order_by, query.order);

        let count = matches.len();
        let page = matches
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .map(to_record)
            .collect();
        (page, count)
    }

    pub fn delete(&mut self, ids: &[RecordId]) {
        self.articles
            .retain(|article| !ids.iter().any(|id| id.as_str() == article.id));
    }

    pub fn mark_seen(&mut self, ids: &[RecordId]) {
        for article in &mut self.articles {
            if ids.iter().any(|id| id.as_str() == article.id) {
                article.seen = true;
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id.as_str())
    }
}

fn matches_filters(article: &Article, query: &Query) -> bool {
    if let Some(status) = query.filters.get("status").and_then(FilterValue::as_text) {
        if !status.is_empty() && article.status.as_str() != status {
            return false;
        }
    }
    if let Some(status) = query.search.get("status").and_then(FilterValue::as_text) {
        if !status.is_empty() && article.status.as_str() != status {
            return false;
        }
    }
    if let Some(needle) = query.search.get("q").and_then(FilterValue::as_text) {
        if !needle.is_empty() {
            let needle = needle.to_lowercase();
            let hit = article.title.to_lowercase().contains(&needle)
                || article.author.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
    }
    true
}

fn sort_articles(articles: &mut [&Article], order_by: ColumnId, order: SortOrder) {
    articles.sort_by(|a, b| {
        let ordering = match order_by {
            TITLE => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            AUTHOR => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
            STATUS => a.status.as_str().cmp(b.status.as_str()),
            VIEWS => a.views.cmp(&b.views),
            SEEN => a.seen.cmp(&b.seen),
            _ => a.updated_at.cmp(&b.updated_at),
        };
        let ordering = match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        };
        // Stable tiebreak so pagination never shuffles equal keys.
        if ordering == Ordering::Equal {
            a.id.cmp(&b.id)
        } else {
            ordering
        }
    });
}

fn to_record(article: &Article) -> Record {
    Record::new(RecordId::new(article.id.clone()))
        .field(TITLE, article.title.clone())
        .field(AUTHOR, article.author.clone())
        .field(STATUS, article.status.to_string())
        .field(VIEWS, article.views)
        .field(SEEN, CellValue::Bool(article.seen))
        .field(UPDATED_AT, article.updated_at)
        .action(RowAction::new(OPEN_ACTION, "Open article", "↗"))
}
