//! # airbound-core
//!
//! Platform-independent airspace boundary reconstruction.
//!
//! Aeronautical sources (AIXM) do not store an airspace outline as a flat
//! point list. They store a sequence of directives - go from here to
//! there along a great circle, along a named national border, along a
//! clockwise or counter-clockwise arc of a named circle - where each
//! directive is only resolvable against auxiliary records supplied as
//! sparse point collections. This crate turns those directives into
//! concrete closed polygons, plus a record of every border the outline
//! follows.
//!
//! The crate is pure computation: no I/O, no async, no platform-specific
//! code. Parsing the source XML, presenting results, and fetching data
//! belong to the surrounding tooling; the engine takes typed records and
//! returns typed polygons.
//!
//! # Architecture
//!
//! - **point**: immutable coordinates with identity and fixed-point
//!   equality
//! - **projection**: local azimuthal-equidistant tangent plane
//! - **boundary**: the reconstruction engine (tessellation, bracketing
//!   search, arc/border extraction, directive assembly)
//! - **coord**: AIXM coordinate-string parsing and DMS formatting
//! - **openair**: textual `DP` waypoint rendering of polygons
//! - **error**: the engine's closed error set
//!
//! # Usage
//!
//! ```rust,ignore
//! use airbound_core::{
//!     reconstruct, AirspaceGeometry, BorderTable, BoundaryDirective,
//!     BoundaryPoint, PathKind, PointTag, DEFAULT_RESOLUTION,
//! };
//!
//! let directives = vec![
//!     BoundaryDirective::new(
//!         BoundaryPoint::new(50.43, 5.09, "9B07939B", PointTag::Vertex),
//!         PathKind::GreatCircle,
//!     ),
//!     // ...
//! ];
//! let borders = BorderTable::new();
//! let airspace = reconstruct(
//!     &AirspaceGeometry::FreeForm(directives),
//!     &borders,
//!     DEFAULT_RESOLUTION,
//! )?;
//! for point in airspace.polygon() {
//!     println!("{}", point);
//! }
//! ```

pub mod boundary;
pub mod coord;
pub mod error;
pub mod openair;
pub mod point;
pub mod projection;

pub use boundary::{
    bracketing_pair, extract_arc_points, extract_border_points, reconstruct, tessellate, Airspace,
    AirspaceGeometry, ArcDirection, Border, BorderCrossing, BorderTable, BoundaryAssembler,
    BoundaryDirective, CircleSpec, PathKind, Ring, DEFAULT_RESOLUTION,
};
pub use coord::{dd2dms, dms2dd, geo_size_to_meters, parse_coordinate, CoordParseError};
pub use error::BoundaryError;
pub use point::{BoundaryPoint, PointTag, DEFAULT_PRECISION};
pub use projection::{AzimuthalEquidistant, EARTH_RADIUS_M};
