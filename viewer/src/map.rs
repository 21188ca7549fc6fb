//! Spatial map view
//!
//! One node per repository on a wavy ring, sized by stars. The ring spins
//! slowly unless the pointer is over it, and at most one repository's
//! detail panel is open at a time.

use std::f64::consts::TAU;

use crate::models::Repository;

/// Ring radius
pub const RADIUS: f64 = 8.0;
/// Amplitude of the vertical wave
pub const WAVE_HEIGHT: f64 = 2.0;
/// Rotation per frame, radians
pub const ROTATION_STEP: f64 = 0.002;

pub const MIN_NODE_SIZE: f64 = 0.5;
pub const MAX_NODE_SIZE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Position of node `index` out of `count` before any rotation
pub fn node_position(index: usize, count: usize) -> Position {
    if count == 0 {
        return Position {
            x: RADIUS,
            y: 0.0,
            z: 0.0,
        };
    }

    let angle = index as f64 / count as f64 * TAU;
    Position {
        x: angle.cos() * RADIUS,
        y: (angle * 3.0).sin() * WAVE_HEIGHT,
        z: angle.sin() * RADIUS,
    }
}

/// Node size for a star count
pub fn node_size(stars: u64) -> f64 {
    (stars as f64 / 10.0 + 0.5).clamp(MIN_NODE_SIZE, MAX_NODE_SIZE)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    pub index: usize,
    pub name: String,
    pub position: Position,
    pub size: f64,
}

/// Lay out every repository on the ring, in list order
pub fn layout(repos: &[Repository]) -> Vec<MapNode> {
    repos
        .iter()
        .enumerate()
        .map(|(index, repo)| MapNode {
            index,
            name: repo.name.clone(),
            position: node_position(index, repos.len()),
            size: node_size(repo.stars()),
        })
        .collect()
}

/// Rotation state of the whole ring: rotating XOR paused
#[derive(Debug, Clone, Default)]
pub struct Turntable {
    angle: f64,
    hovered: bool,
}

impl Turntable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one animation frame
    pub fn tick(&mut self) {
        if !self.hovered {
            self.angle = (self.angle + ROTATION_STEP) % TAU;
        }
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn is_rotating(&self) -> bool {
        !self.hovered
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotate `position` about the vertical axis by the current angle
    pub fn apply(&self, position: Position) -> Position {
        let (sin, cos) = self.angle.sin_cos();
        Position {
            x: position.x * cos + position.z * sin,
            y: position.y,
            z: -position.x * sin + position.z * cos,
        }
    }
}

/// Detail panel: closed, or open on one repository (by list index)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailPanel {
    #[default]
    Closed,
    Open(usize),
}

impl DetailPanel {
    /// Clicking a node opens its panel, replacing any open one
    pub fn click(&mut self, index: usize) {
        *self = DetailPanel::Open(index);
    }

    pub fn dismiss(&mut self) {
        *self = DetailPanel::Closed;
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            DetailPanel::Closed => None,
            DetailPanel::Open(index) => Some(*index),
        }
    }
}

/// Render the ring and, when open, the detail panel
pub fn render_map(repos: &[Repository], turntable: &Turntable, panel: &DetailPanel) -> String {
    let mut buf = String::new();

    buf.push_str("## Repository Map\n\n");
    if repos.is_empty() {
        buf.push_str("_No repositories to show._\n");
        return buf;
    }

    buf.push_str(&format!(
        "{} at {:.3} rad - `:hover` to pause, `:open <name|#>` for details\n\n",
        if turntable.is_rotating() {
            "Rotating"
        } else {
            "Paused"
        },
        turntable.angle()
    ));

    let selected = panel.selected();
    for node in layout(repos) {
        let p = turntable.apply(node.position);
        let marker = if selected == Some(node.index) { '*' } else { ' ' };
        buf.push_str(&format!(
            "{} {:>3}. {:<30} ({:>6.2}, {:>5.2}, {:>6.2})  size {:.2}\n",
            marker,
            node.index + 1,
            node.name,
            p.x,
            p.y,
            p.z,
            node.size
        ));
    }

    if let Some(repo) = selected.and_then(|i| repos.get(i)) {
        buf.push('\n');
        buf.push_str(&render_detail(repo));
    }

    buf
}

fn render_detail(repo: &Repository) -> String {
    format!(
        "### {}\n\n{}\n\n- Language: {}\n- Stars: {}\n- Forks: {}\n- URL: {}\n\n`:close` to dismiss\n",
        repo.name,
        repo.description
            .as_deref()
            .unwrap_or("No description available"),
        repo.language.as_deref().unwrap_or("Unknown"),
        repo.stars(),
        repo.forks_count,
        repo.html_url
    )
}
