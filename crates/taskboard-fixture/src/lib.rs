//! Seeded task-tracker fixture application for the e2e suite.
//!
//! Serves a deterministic rendition of the task tracker on an ephemeral
//! local port: `/projects`, `/issues` and `/board/{id}`, backed by a fixed
//! seed data set. Every scenario precondition the suite relies on (which
//! tasks exist, which board has which columns populated) is guaranteed by
//! [`Seed::demo`], so scenario assertions never need to be conditional.
//!
//! The markup is intentionally heterogeneous across screens — the issues
//! screen carries `data-testid` attributes, the board screen only class
//! names, action buttons their localized labels — mirroring the mixed
//! markup of the real deployment that the suite's selector fallback groups
//! exist to absorb.

pub mod pages;
pub mod seed;
pub mod server;

pub use seed::{Priority, Project, Seed, Status, Task};
pub use server::FixtureServer;
