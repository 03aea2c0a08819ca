//! # repotabs - open git repositories in iTerm2
//!
//! `repotabs` scans a base directory for git repositories and opens them in
//! iTerm2, four panes per tab. The first tab gets a new window, every further
//! group of repositories becomes a new tab of that window.
//!
//! ## Quick Start
//!
//! ```bash
//! repotabs init                      # write ~/.config/repotabs/repotabs.yaml
//! repotabs list                      # show what would be opened
//! repotabs --base-dir ~/work         # open everything under ~/work
//! repotabs open --dry-run            # print the AppleScript instead
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: repositories, groups, configuration and the pane layout
//! - [`application`]: grouping service and the find / open use cases
//! - [`infrastructure`]: directory scanning, config files, the `osascript`
//!   bridge and AppleScript generation
//! - [`presentation`]: CLI interface
//! - [`common`]: error handling and templates
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use repotabs::application::use_cases::find_repositories::{
//!     FindRepositoriesConfig, FindRepositoriesUseCase,
//! };
//! use repotabs::application::use_cases::open_repositories::{
//!     OpenRepositoriesConfig, OpenRepositoriesUseCase,
//! };
//! use repotabs::domain::value_objects::terminal_app::TerminalApp;
//! use repotabs::infrastructure::{OsascriptRunner, TerminalDriver};
//!
//! # async fn example() -> repotabs::Result<()> {
//! let found = FindRepositoriesUseCase::new(
//!     FindRepositoriesConfig::new("/Users/me/work").with_exclude(vec!["helm-charts".into()]),
//! )
//! .execute()?;
//!
//! let driver = TerminalDriver::new(TerminalApp::default(), Arc::new(OsascriptRunner::default()));
//! let result = OpenRepositoriesUseCase::new(OpenRepositoriesConfig::default(), driver)
//!     .execute(found.repositories)
//!     .await?;
//!
//! println!("Opened {} tabs", result.groups_opened);
//! # Ok(())
//! # }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::RepoTabsError;
pub use crate::common::result::RepoTabsResult as Result;
