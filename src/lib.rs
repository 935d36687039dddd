//! k-means clustering with k-means++ seeding.
//!
//! A run validates its [`Params`], picks `k` seeds with
//! [`kmeans_plusplus`] from a caller-seeded generator, then refines them with
//! Lloyd's iteration ([`refine`]) until no centroid moves `epsilon` or the
//! iteration cap is hit. [`KMeans`] ties the steps together.

pub mod algorithm;
pub mod centroid;
pub mod clustering;
pub mod config;
pub mod convergence;
pub mod distance;
pub mod error;
pub mod inertia;
pub mod initialization;
pub mod load;
pub mod logger;
pub mod points;

pub use algorithm::{assign, refine, Refinement};
pub use clustering::{ClusteringResult, KMeans};
pub use config::{parse_count, parse_epsilon, Params, DEFAULT_MAX_ITER};
pub use convergence::{has_converged, max_displacement};
pub use error::{Error, Result};
pub use inertia::calculate_inertia;
pub use initialization::{kmeans_plusplus, seed_weights, Seeds, DEFAULT_SEED};
pub use load::load_joined;
pub use points::PointSet;
