//! Boundary assembly.
//!
//! An airspace's outline arrives as an ordered list of directives, each
//! pairing an anchor point with the kind of path leading to the next
//! anchor. A directive cannot be realized until the following anchor is
//! known, so the assembler runs a small state machine: the first anchor
//! is buffered, every later directive resolves the buffered one against
//! the current anchor as its stop point, and the final buffered anchor
//! closes the polygon.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::arc::{extract_arc_points, ArcDirection};
use super::border::{extract_border_points, BorderTable};
use super::circle::{tessellate, CircleSpec};
use crate::error::BoundaryError;
use crate::point::BoundaryPoint;

/// How one anchor connects to the next directive's anchor.
///
/// These mirror the AIXM vertex codes: GRC and RHL legs contribute the
/// anchor alone, FNT legs follow a named border, CWA and CCA legs follow
/// an arc of a named circle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    /// Great-circle leg to the next anchor
    GreatCircle,
    /// Rhumb-line leg to the next anchor
    Rhumb,
    /// Follow the referenced border to the next anchor
    Border { border_id: String },
    /// Follow a circle arc clockwise to the next anchor
    ArcClockwise {
        center: BoundaryPoint,
        radius_m: f64,
    },
    /// Follow a circle arc counter-clockwise to the next anchor
    ArcCounterClockwise {
        center: BoundaryPoint,
        radius_m: f64,
    },
}

/// One entry of an airspace's raw boundary description.
///
/// The path describes the leg from this anchor to the next directive's
/// anchor; the last directive in a list only contributes its anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDirective {
    pub anchor: BoundaryPoint,
    pub path: PathKind,
}

impl BoundaryDirective {
    pub fn new(anchor: BoundaryPoint, path: PathKind) -> Self {
        BoundaryDirective { anchor, path }
    }
}

/// Raw geometry of one airspace as handed over by the loading layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AirspaceGeometry {
    /// A plain circular airspace
    Circle(CircleSpec),
    /// A free-form airspace described by directives
    FreeForm(Vec<BoundaryDirective>),
}

impl AirspaceGeometry {
    /// Build from the loading layer's optional fields, rejecting records
    /// that carry neither shape.
    pub fn from_raw(
        circle: Option<CircleSpec>,
        directives: Option<Vec<BoundaryDirective>>,
    ) -> Result<Self, BoundaryError> {
        match (circle, directives) {
            (Some(spec), _) => Ok(AirspaceGeometry::Circle(spec)),
            (None, Some(list)) => Ok(AirspaceGeometry::FreeForm(list)),
            (None, None) => Err(BoundaryError::UnknownGeometry),
        }
    }
}

/// The run of border points an airspace shares with one border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderCrossing {
    pub border_id: String,
    pub border_name: String,
    /// Entry anchor, traversed border vertices, exit anchor
    pub points: Vec<BoundaryPoint>,
}

/// A reconstructed airspace boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Airspace {
    polygon: Vec<BoundaryPoint>,
    crossings: Vec<BorderCrossing>,
}

impl Airspace {
    /// The closed outline, in directive order.
    pub fn polygon(&self) -> &[BoundaryPoint] {
        &self.polygon
    }

    /// Every border crossing, in traversal order.
    pub fn crossings(&self) -> &[BorderCrossing] {
        &self.crossings
    }

    /// Crossings of one particular border.
    pub fn crossings_of<'a>(
        &'a self,
        border_id: &'a str,
    ) -> impl Iterator<Item = &'a BorderCrossing> {
        self.crossings
            .iter()
            .filter(move |c| c.border_id == border_id)
    }

    /// Render the outline as a GeoJSON Polygon value, positions in
    /// longitude-latitude order.
    pub fn to_geojson(&self) -> serde_json::Value {
        let positions: Vec<[f64; 2]> = self
            .polygon
            .iter()
            .map(|p| [p.longitude(), p.latitude()])
            .collect();
        json!({
            "type": "Polygon",
            "coordinates": [positions],
        })
    }
}

#[derive(Debug)]
enum AssemblerState {
    /// No directive seen yet
    Empty,
    /// One directive buffered, waiting for its stop anchor
    Streaming { pending: BoundaryDirective },
    /// Terminal: the polygon has been closed or a resolution failed
    Closed,
}

/// Drives directive resolution and accumulates the polygon.
///
/// States move `Empty -> Streaming -> Closed`; a resolution error leaves
/// the assembler closed, matching the engine's no-partial-recovery rule.
pub struct BoundaryAssembler<'a> {
    borders: &'a BorderTable,
    resolution: u32,
    state: AssemblerState,
    polygon: Vec<BoundaryPoint>,
    crossings: Vec<BorderCrossing>,
}

impl<'a> BoundaryAssembler<'a> {
    pub fn new(borders: &'a BorderTable, resolution: u32) -> Self {
        BoundaryAssembler {
            borders,
            resolution,
            state: AssemblerState::Empty,
            polygon: Vec::new(),
            crossings: Vec::new(),
        }
    }

    /// Consume the ordered directive list and produce the airspace.
    pub fn assemble(
        mut self,
        directives: impl IntoIterator<Item = BoundaryDirective>,
    ) -> Result<Airspace, BoundaryError> {
        for directive in directives {
            self.push(directive)?;
        }
        Ok(self.finish())
    }

    fn push(&mut self, directive: BoundaryDirective) -> Result<(), BoundaryError> {
        match std::mem::replace(&mut self.state, AssemblerState::Closed) {
            AssemblerState::Empty => {
                log::debug!("buffering the very first anchor");
            }
            AssemblerState::Streaming { pending } => {
                self.resolve(pending, &directive.anchor)?;
            }
            AssemblerState::Closed => {}
        }
        self.state = AssemblerState::Streaming { pending: directive };
        Ok(())
    }

    /// Realize the buffered directive's path against its stop anchor.
    fn resolve(
        &mut self,
        pending: BoundaryDirective,
        stop: &BoundaryPoint,
    ) -> Result<(), BoundaryError> {
        let BoundaryDirective { anchor, path } = pending;
        match path {
            PathKind::GreatCircle | PathKind::Rhumb => {
                self.polygon.push(anchor);
            }
            PathKind::Border { border_id } => {
                let border =
                    self.borders
                        .get(&border_id)
                        .ok_or_else(|| BoundaryError::UnknownBorder {
                            border_id: border_id.clone(),
                        })?;
                log::debug!("expanding border {} ({})", border.id(), border.name());
                let run = extract_border_points(border, &anchor, stop)?;

                let mut crossed = Vec::with_capacity(run.len() + 2);
                crossed.push(anchor.clone());
                crossed.extend(run.iter().cloned());
                crossed.push(stop.clone());
                self.crossings.push(BorderCrossing {
                    border_id,
                    border_name: border.name().to_string(),
                    points: crossed,
                });

                self.polygon.push(anchor);
                self.polygon.extend(run);
            }
            PathKind::ArcClockwise { center, radius_m } => {
                self.resolve_arc(anchor, stop, center, radius_m, ArcDirection::Clockwise)?;
            }
            PathKind::ArcCounterClockwise { center, radius_m } => {
                self.resolve_arc(anchor, stop, center, radius_m, ArcDirection::CounterClockwise)?;
            }
        }
        Ok(())
    }

    fn resolve_arc(
        &mut self,
        anchor: BoundaryPoint,
        stop: &BoundaryPoint,
        center: BoundaryPoint,
        radius_m: f64,
        direction: ArcDirection,
    ) -> Result<(), BoundaryError> {
        log::debug!(
            "expanding arc around ({}, {}) radius {} m",
            center.latitude(),
            center.longitude(),
            radius_m
        );
        // Fresh tessellation per directive; circles are never cached
        let ring = tessellate(&CircleSpec::new(center, radius_m), self.resolution)?;
        let run = extract_arc_points(&ring, &anchor, stop, direction)?;
        self.polygon.push(anchor);
        self.polygon.extend(run);
        Ok(())
    }

    /// Append the final buffered anchor and close the polygon.
    fn finish(mut self) -> Airspace {
        if let AssemblerState::Streaming { pending } =
            std::mem::replace(&mut self.state, AssemblerState::Closed)
        {
            self.polygon.push(pending.anchor);
        }
        Airspace {
            polygon: self.polygon,
            crossings: self.crossings,
        }
    }
}

/// Reconstruct one airspace boundary from its raw geometry.
///
/// A circular airspace's polygon is the full tessellated ring; a
/// free-form airspace runs the directive state machine. Failures are
/// terminal for this airspace and surface unchanged.
pub fn reconstruct(
    geometry: &AirspaceGeometry,
    borders: &BorderTable,
    resolution: u32,
) -> Result<Airspace, BoundaryError> {
    match geometry {
        AirspaceGeometry::Circle(spec) => {
            let polygon = tessellate(spec, resolution)?;
            Ok(Airspace {
                polygon,
                crossings: Vec::new(),
            })
        }
        AirspaceGeometry::FreeForm(directives) => {
            BoundaryAssembler::new(borders, resolution).assemble(directives.iter().cloned())
        }
    }
}
