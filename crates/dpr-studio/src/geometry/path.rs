use super::{format_coordinate, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
}

/// Ordered drawing instructions for a straight-segment polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathDescriptor {
    commands: Vec<PathCommand>,
}

impl PathDescriptor {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Appends a close instruction. Empty descriptors stay empty.
    pub fn close(mut self) -> Self {
        if !self.commands.is_empty() {
            self.commands.push(PathCommand::ClosePath);
        }
        self
    }

    /// Renders SVG path data such as `M 40 180 L 100 62.5 Z`.
    pub fn to_svg(&self, precision: Option<usize>) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            let part = match command {
                PathCommand::MoveTo { x, y } => format!(
                    "M {} {}",
                    format_coordinate(*x, precision),
                    format_coordinate(*y, precision)
                ),
                PathCommand::LineTo { x, y } => format!(
                    "L {} {}",
                    format_coordinate(*x, precision),
                    format_coordinate(*y, precision)
                ),
                PathCommand::ClosePath => "Z".to_string(),
            };
            parts.push(part);
        }
        parts.join(" ")
    }
}

/// Turns ordered points into a move followed by one line per remaining point.
pub fn build_path<I>(points: I) -> PathDescriptor
where
    I: IntoIterator<Item = Point>,
{
    let commands = points
        .into_iter()
        .enumerate()
        .map(|(index, Point { x, y })| {
            if index == 0 {
                PathCommand::MoveTo { x, y }
            } else {
                PathCommand::LineTo { x, y }
            }
        })
        .collect();

    PathDescriptor { commands }
}
