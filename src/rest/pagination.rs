//! Pagination constructs shared by the list operations.

use serde::{Deserialize, Serialize};

// region:    --- Pagination

/// The pagination metadata of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
	/// The url that would repeat the request.
	pub refresh_url: Option<String>,
	/// The url of the next page, when there is one.
	pub next_url: Option<String>,
	/// Number of objects on this page (only with `include_count=true`).
	pub total: Option<u64>,
	/// Number of objects matching the request (only with `include_count=true`).
	pub matched: Option<u64>,
	pub refresh_cursor: Option<String>,
	/// Pass this as `cursor` to get the next page.
	pub next_cursor: Option<String>,
}

impl Pagination {
	pub fn has_next(&self) -> bool {
		self.next_cursor.is_some() || self.next_url.is_some()
	}
}

// endregion: --- Pagination

// region:    --- Sort

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

/// A sort property, rendered with a leading `-` when descending (e.g., `-updated`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
	pub field: String,
	pub direction: SortDirection,
}

impl Sort {
	pub fn asc(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Ascending,
		}
	}

	pub fn desc(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			direction: SortDirection::Descending,
		}
	}
}

/// Parse the wire form, `-field` is descending, `field` or `+field` ascending.
impl From<&str> for Sort {
	fn from(value: &str) -> Self {
		if let Some(field) = value.strip_prefix('-') {
			Self::desc(field)
		} else {
			Self::asc(value.strip_prefix('+').unwrap_or(value))
		}
	}
}

impl std::fmt::Display for Sort {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.direction {
			SortDirection::Ascending => write!(f, "{}", self.field),
			SortDirection::Descending => write!(f, "-{}", self.field),
		}
	}
}

// endregion: --- Sort

// region:    --- ListOptions

/// Options of the list operations. `None` fields are omitted from the query.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
	pub page_limit: Option<u32>,
	pub include_count: Option<bool>,
	pub sort: Option<Sort>,
	pub cursor: Option<String>,
}

/// Chainable Setters
impl ListOptions {
	#[must_use]
	pub const fn with_page_limit(mut self, value: u32) -> Self {
		self.page_limit = Some(value);
		self
	}

	#[must_use]
	pub const fn with_include_count(mut self, value: bool) -> Self {
		self.include_count = Some(value);
		self
	}

	#[must_use]
	pub fn with_sort(mut self, sort: impl Into<Sort>) -> Self {
		self.sort = Some(sort.into());
		self
	}

	#[must_use]
	pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
		self.cursor = Some(cursor.into());
		self
	}

	/// Options for the page following `pagination`, or `None` on the last page.
	pub fn next_page(&self, pagination: &Pagination) -> Option<Self> {
		let cursor = pagination.next_cursor.clone()?;
		Some(Self {
			cursor: Some(cursor),
			..self.clone()
		})
	}
}

// endregion: --- ListOptions

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sort_display() {
		assert_eq!(Sort::asc("name").to_string(), "name");
		assert_eq!(Sort::desc("updated").to_string(), "-updated");
	}

	#[test]
	fn test_sort_from_str() {
		assert_eq!(Sort::from("-modified"), Sort::desc("modified"));
		assert_eq!(Sort::from("+intent"), Sort::asc("intent"));
		assert_eq!(Sort::from("intent"), Sort::asc("intent"));
	}

	#[test]
	fn test_next_page_keeps_options() {
		let opts = ListOptions::default().with_page_limit(20).with_sort("-updated");
		let pagination = Pagination {
			next_cursor: Some("abc".to_string()),
			..Default::default()
		};

		let next = opts.next_page(&pagination).unwrap();
		assert_eq!(next.page_limit, Some(20));
		assert_eq!(next.cursor.as_deref(), Some("abc"));
		assert_eq!(next.sort, Some(Sort::desc("updated")));

		assert!(opts.next_page(&Pagination::default()).is_none());
	}
}

// endregion: --- Tests
