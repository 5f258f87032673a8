use crate::error::{Error, Result};
use crate::graph::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Layered (dagre-style) placement along `Direction`.
    Hierarchical,
    /// Spring-electrical simulation.
    Force,
    /// BFS rings around a focus node.
    Radial,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Hierarchical, Strategy::Force, Strategy::Radial];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Hierarchical => "hierarchical",
            Strategy::Force => "force",
            Strategy::Radial => "radial",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hierarchical" => Ok(Self::Hierarchical),
            "force" => Ok(Self::Force),
            "radial" => Ok(Self::Radial),
            _ => Err(Error::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Rank axis of the hierarchical layout. Sources sit at the named start edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

impl Direction {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::LR | Direction::RL)
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::BT | Direction::RL)
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tb" | "td" | "top-to-bottom" => Ok(Self::TB),
            "bt" | "bottom-to-top" => Ok(Self::BT),
            "lr" | "left-to-right" => Ok(Self::LR),
            "rl" | "right-to-left" => Ok(Self::RL),
            _ => Err(Error::InvalidOption {
                name: "direction",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchicalOptions {
    pub direction: Direction,
    pub node_width: f64,
    pub node_height: f64,
    /// Gap between adjacent ranks (dagre `ranksep`).
    pub rank_separation: f64,
    /// Gap between neighbouring nodes of one rank (dagre `nodesep`).
    pub node_separation: f64,
}

impl Default for HierarchicalOptions {
    fn default() -> Self {
        Self {
            direction: Direction::TB,
            node_width: DEFAULT_NODE_WIDTH,
            node_height: DEFAULT_NODE_HEIGHT,
            rank_separation: 50.0,
            node_separation: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForceOptions {
    pub iterations: usize,
    pub repulsion: f64,
    pub attraction: f64,
    /// Velocity multiplier applied after every integration step.
    pub damping: f64,
    /// Floor for the pairwise distance used by repulsion.
    pub min_distance: f64,
}

impl Default for ForceOptions {
    fn default() -> Self {
        Self {
            iterations: 100,
            repulsion: 5000.0,
            attraction: 0.01,
            damping: 0.9,
            min_distance: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialOptions {
    pub focus_node_id: Option<String>,
    pub level_spacing: f64,
    pub center: Point,
    /// Node box used to turn ring coordinates into top-left anchors.
    pub node_width: f64,
    pub node_height: f64,
}

impl Default for RadialOptions {
    fn default() -> Self {
        Self {
            focus_node_id: None,
            level_spacing: 150.0,
            center: Point::ORIGIN,
            node_width: DEFAULT_NODE_WIDTH,
            node_height: DEFAULT_NODE_HEIGHT,
        }
    }
}

pub const DEFAULT_NODE_WIDTH: f64 = 172.0;
pub const DEFAULT_NODE_HEIGHT: f64 = 36.0;

#[derive(Debug, Clone)]
pub enum Algorithm {
    Hierarchical(HierarchicalOptions),
    Force(ForceOptions),
    Radial(RadialOptions),
}

impl Algorithm {
    pub fn strategy(&self) -> Strategy {
        match self {
            Algorithm::Hierarchical(_) => Strategy::Hierarchical,
            Algorithm::Force(_) => Strategy::Force,
            Algorithm::Radial(_) => Strategy::Radial,
        }
    }
}

/// Caller-facing options shared by every strategy.
///
/// Every field is optional; a strategy reads only the fields it understands and
/// fills the rest from its defaults. The JSON form uses camelCase keys
/// (`nodeWidth`, `rankSeparation`, `focusNodeId`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_separation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_separation: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repulsion: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attraction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_distance: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Finite and `>= 0`.
    NonNegative,
    /// Finite and `> 0`.
    Positive,
    /// Within `[0, 1]`.
    UnitInterval,
}

fn check(name: &'static str, value: Option<f64>, default: f64, rule: Rule) -> Result<f64> {
    let Some(v) = value else {
        return Ok(default);
    };
    let ok = v.is_finite()
        && match rule {
            Rule::NonNegative => v >= 0.0,
            Rule::Positive => v > 0.0,
            Rule::UnitInterval => (0.0..=1.0).contains(&v),
        };
    if ok {
        Ok(v)
    } else {
        Err(Error::InvalidOption {
            name,
            value: v.to_string(),
        })
    }
}

fn lenient(value: Result<f64>, default: f64) -> f64 {
    value.unwrap_or_else(|err| {
        tracing::warn!(%err, default, "falling back to default layout option");
        default
    })
}

impl LayoutOptions {
    pub fn try_hierarchical(&self) -> Result<HierarchicalOptions> {
        let d = HierarchicalOptions::default();
        Ok(HierarchicalOptions {
            direction: self.direction.unwrap_or(d.direction),
            node_width: check("nodeWidth", self.node_width, d.node_width, Rule::NonNegative)?,
            node_height: check("nodeHeight", self.node_height, d.node_height, Rule::NonNegative)?,
            rank_separation: check(
                "rankSeparation",
                self.rank_separation,
                d.rank_separation,
                Rule::NonNegative,
            )?,
            node_separation: check(
                "nodeSeparation",
                self.node_separation,
                d.node_separation,
                Rule::NonNegative,
            )?,
        })
    }

    pub fn hierarchical(&self) -> HierarchicalOptions {
        let d = HierarchicalOptions::default();
        HierarchicalOptions {
            direction: self.direction.unwrap_or(d.direction),
            node_width: lenient(
                check("nodeWidth", self.node_width, d.node_width, Rule::NonNegative),
                d.node_width,
            ),
            node_height: lenient(
                check("nodeHeight", self.node_height, d.node_height, Rule::NonNegative),
                d.node_height,
            ),
            rank_separation: lenient(
                check(
                    "rankSeparation",
                    self.rank_separation,
                    d.rank_separation,
                    Rule::NonNegative,
                ),
                d.rank_separation,
            ),
            node_separation: lenient(
                check(
                    "nodeSeparation",
                    self.node_separation,
                    d.node_separation,
                    Rule::NonNegative,
                ),
                d.node_separation,
            ),
        }
    }

    pub fn try_force(&self) -> Result<ForceOptions> {
        let d = ForceOptions::default();
        Ok(ForceOptions {
            iterations: self.iterations.unwrap_or(d.iterations),
            repulsion: check("repulsion", self.repulsion, d.repulsion, Rule::NonNegative)?,
            attraction: check("attraction", self.attraction, d.attraction, Rule::NonNegative)?,
            damping: check("damping", self.damping, d.damping, Rule::UnitInterval)?,
            min_distance: check("minDistance", self.min_distance, d.min_distance, Rule::Positive)?,
        })
    }

    pub fn force(&self) -> ForceOptions {
        let d = ForceOptions::default();
        ForceOptions {
            iterations: self.iterations.unwrap_or(d.iterations),
            repulsion: lenient(
                check("repulsion", self.repulsion, d.repulsion, Rule::NonNegative),
                d.repulsion,
            ),
            attraction: lenient(
                check("attraction", self.attraction, d.attraction, Rule::NonNegative),
                d.attraction,
            ),
            damping: lenient(
                check("damping", self.damping, d.damping, Rule::UnitInterval),
                d.damping,
            ),
            min_distance: lenient(
                check("minDistance", self.min_distance, d.min_distance, Rule::Positive),
                d.min_distance,
            ),
        }
    }

    pub fn try_radial(&self) -> Result<RadialOptions> {
        let d = RadialOptions::default();
        let center = match self.center {
            Some(c) if !c.is_finite() => {
                return Err(Error::InvalidOption {
                    name: "center",
                    value: format!("({}, {})", c.x, c.y),
                });
            }
            Some(c) => c,
            None => d.center,
        };
        Ok(RadialOptions {
            focus_node_id: self.focus_node_id.clone(),
            level_spacing: check(
                "levelSpacing",
                self.level_spacing,
                d.level_spacing,
                Rule::NonNegative,
            )?,
            center,
            node_width: check("nodeWidth", self.node_width, d.node_width, Rule::NonNegative)?,
            node_height: check("nodeHeight", self.node_height, d.node_height, Rule::NonNegative)?,
        })
    }

    pub fn radial(&self) -> RadialOptions {
        let d = RadialOptions::default();
        let center = match self.center {
            Some(c) if c.is_finite() => c,
            Some(c) => {
                tracing::warn!(x = c.x, y = c.y, "non-finite radial center; using origin");
                d.center
            }
            None => d.center,
        };
        RadialOptions {
            focus_node_id: self.focus_node_id.clone(),
            level_spacing: lenient(
                check(
                    "levelSpacing",
                    self.level_spacing,
                    d.level_spacing,
                    Rule::NonNegative,
                ),
                d.level_spacing,
            ),
            center,
            node_width: lenient(
                check("nodeWidth", self.node_width, d.node_width, Rule::NonNegative),
                d.node_width,
            ),
            node_height: lenient(
                check("nodeHeight", self.node_height, d.node_height, Rule::NonNegative),
                d.node_height,
            ),
        }
    }

    /// Resolves these options for `strategy`, replacing invalid values with defaults.
    pub fn algorithm(&self, strategy: Strategy) -> Algorithm {
        match strategy {
            Strategy::Hierarchical => Algorithm::Hierarchical(self.hierarchical()),
            Strategy::Force => Algorithm::Force(self.force()),
            Strategy::Radial => Algorithm::Radial(self.radial()),
        }
    }

    /// Like [`LayoutOptions::algorithm`], but rejects invalid values.
    pub fn try_algorithm(&self, strategy: Strategy) -> Result<Algorithm> {
        Ok(match strategy {
            Strategy::Hierarchical => Algorithm::Hierarchical(self.try_hierarchical()?),
            Strategy::Force => Algorithm::Force(self.try_force()?),
            Strategy::Radial => Algorithm::Radial(self.try_radial()?),
        })
    }
}
