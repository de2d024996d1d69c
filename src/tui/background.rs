//! Animated background field.
//!
//! Renders the scene behind the deck content: a drifting particle field,
//! concentric orbit lines, a wave plane, and a ball that chases the pointer
//! on a spring. Everything is driven by the shared scroll/pointer signals
//! and recolored from the active section's palette. Per-frame work is
//! bounded: one pass over the cells for the wave plane plus a fixed number
//! of particles, orbit points, and ball cells.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Position, layout::Rect, style::Color, Frame};

use crate::deck::SectionPalette;
use crate::engine::InputSignals;

const PARTICLE_COUNT: usize = 140;
const ORBIT_COUNT: usize = 6;
const ORBIT_SEGMENTS: usize = 48;

/// Half-extent of the field coordinate system, in field units.
const FIELD: f32 = 10.0;

/// Linear mix of two RGB colors. Non-RGB colors pass through unchanged.
pub(super) fn mix(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let channel = |x: u8, y: u8| -> u8 {
                (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8
            };
            Color::Rgb(channel(r1, r2), channel(g1, g2), channel(b1, b2))
        }
        _ => a,
    }
}

/// Scales an RGB color toward black. Stands in for alpha on a terminal.
pub(super) fn dim(color: Color, factor: f32) -> Color {
    mix(Color::Rgb(0, 0, 0), color, factor)
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    /// 0 = far, 1 = near. Picks the glyph and brightness.
    depth: f32,
}

struct Ball {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    spin: f32,
}

/// The animated field behind the content.
pub struct BackgroundField {
    particles: Vec<Particle>,
    /// Precomputed orbit points in field units, per ring.
    orbits: Vec<Vec<(f32, f32)>>,
    ball: Ball,
    time: f32,
}

impl BackgroundField {
    /// Seeds the particle field and orbit rings.
    #[must_use]
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();

        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(-FIELD..FIELD),
                y: rng.gen_range(-FIELD..FIELD),
                vx: rng.gen_range(-0.5..0.5),
                vy: rng.gen_range(-0.5..0.5),
                depth: rng.gen_range(0.0..1.0),
            })
            .collect();

        let orbits = (0..ORBIT_COUNT)
            .map(|ring| {
                let radius = 3.0 + ring as f32 * 1.2 + rng.gen_range(0.0..0.8);
                (0..ORBIT_SEGMENTS)
                    .map(|segment| {
                        let angle =
                            segment as f32 / ORBIT_SEGMENTS as f32 * std::f32::consts::TAU;
                        let wobble = (angle * 3.0).sin() * 0.6;
                        (angle.cos() * radius, angle.sin() * (radius + wobble))
                    })
                    .collect()
            })
            .collect();

        Self {
            particles,
            orbits,
            ball: Ball {
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                spin: 0.0,
            },
            time: 0.0,
        }
    }

    /// Advances the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f32, signals: &InputSignals) {
        self.time += dt;

        for particle in &mut self.particles {
            particle.x += particle.vx * dt;
            particle.y += particle.vy * dt;
            if particle.x.abs() > FIELD {
                particle.vx = -particle.vx;
                particle.x = particle.x.clamp(-FIELD, FIELD);
            }
            if particle.y.abs() > FIELD {
                particle.vy = -particle.vy;
                particle.y = particle.y.clamp(-FIELD, FIELD);
            }
        }

        // Spring-damper follower: the ball is pushed toward a target set by
        // the pointer, with depth nudged by scroll.
        let target_x = signals.pointer.x * 3.0;
        let target_y = signals.pointer.y * 3.0 - signals.scroll_y * 0.002;
        let dx = target_x - self.ball.x;
        let dy = target_y - self.ball.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > f32::EPSILON {
            let force = distance * 0.15;
            self.ball.vx = self.ball.vx * 0.85 + dx / distance * force;
            self.ball.vy = self.ball.vy * 0.85 + dy / distance * force;
        } else {
            self.ball.vx *= 0.85;
            self.ball.vy *= 0.85;
        }
        self.ball.x += self.ball.vx * dt * 10.0;
        self.ball.y += self.ball.vy * dt * 10.0;

        let speed = (self.ball.vx * self.ball.vx + self.ball.vy * self.ball.vy).sqrt();
        self.ball.spin += (speed * 0.5 + 0.1) * dt;
    }

    /// Draws the field into the frame buffer.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        palette: &SectionPalette,
        signals: &InputSignals,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buf = frame.buffer_mut();
        self.render_wave(buf, area, palette);
        self.render_orbits(buf, area, palette, signals);
        self.render_particles(buf, area, palette, signals);
        self.render_ball(buf, area, palette);
    }

    /// Wave plane: two interfering sine fields under a radial falloff,
    /// drawn as a faint background tint.
    fn render_wave(&self, buf: &mut Buffer, area: Rect, palette: &SectionPalette) {
        let time = self.time * 0.5;
        for row in 0..area.height {
            for col in 0..area.width {
                let u = f32::from(col) / f32::from(area.width.max(1));
                let v = f32::from(row) / f32::from(area.height.max(1));

                let wave = ((u * 10.0 + time).sin() * (v * 10.0 + time).sin()).mul_add(0.5, 0.5);
                let center_dist = ((u - 0.5).powi(2) + (v - 0.5).powi(2)).sqrt();
                let gradient = 1.0 - smoothstep(0.0, 0.7, center_dist);

                let intensity = wave * gradient * 0.22;
                if intensity > 0.02 {
                    let color = mix(palette.primary, palette.emissive, wave);
                    if let Some(cell) =
                        buf.cell_mut(Position::new(area.x + col, area.y + row))
                    {
                        cell.set_bg(dim(color, intensity));
                    }
                }
            }
        }
    }

    fn render_orbits(
        &self,
        buf: &mut Buffer,
        area: Rect,
        palette: &SectionPalette,
        signals: &InputSignals,
    ) {
        // Ring rotation follows scroll and pointer the way the point cloud
        // does, half as strongly.
        let phase = signals.scroll_y * 0.001 + signals.pointer.x * 0.05 + self.time * 0.05;
        let (sin, cos) = phase.sin_cos();

        for (ring, points) in self.orbits.iter().enumerate() {
            let color = if ring % 2 == 0 {
                palette.primary
            } else {
                palette.secondary
            };
            for &(x, y) in points {
                let rx = x * cos - y * sin;
                let ry = x * sin + y * cos;
                if let Some((col, row)) = Self::project(rx, ry, area) {
                    if let Some(cell) = buf.cell_mut(Position::new(col, row)) {
                        if cell.symbol() == " " {
                            cell.set_char('·').set_fg(dim(color, 0.35));
                        }
                    }
                }
            }
        }
    }

    fn render_particles(
        &self,
        buf: &mut Buffer,
        area: Rect,
        palette: &SectionPalette,
        signals: &InputSignals,
    ) {
        // Field drift: the cloud pans with scroll and leans toward the
        // pointer, so both inputs are visible immediately.
        let angle = self.time * 0.1 + signals.scroll_y * 0.002 + signals.pointer.x * 0.1;
        let (sin, cos) = angle.sin_cos();
        let offset_y = signals.pointer.y * 1.5;

        for particle in &self.particles {
            let rx = particle.x * cos - particle.y * sin;
            let ry = particle.x * sin + particle.y * cos + offset_y;
            let Some((col, row)) = Self::project(rx, ry, area) else {
                continue;
            };

            let glyph = if particle.depth < 0.33 {
                '·'
            } else if particle.depth < 0.66 {
                '•'
            } else {
                '●'
            };
            let color = mix(palette.primary, palette.secondary, particle.depth);
            if let Some(cell) = buf.cell_mut(Position::new(col, row)) {
                cell.set_char(glyph)
                    .set_fg(dim(color, 0.4 + particle.depth * 0.6));
            }
        }
    }

    fn render_ball(&self, buf: &mut Buffer, area: Rect, palette: &SectionPalette) {
        let radius = 2.5;
        for row in 0..area.height {
            for col in 0..area.width {
                let (fx, fy) = Self::unproject(col, row, area);
                let dx = fx - self.ball.x;
                let dy = fy - self.ball.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > radius {
                    continue;
                }

                let angle = dy.atan2(dx);
                // Seam pattern rolls with the spin.
                let seam = ((angle * 3.0 + self.ball.spin).sin()).abs() < 0.18;
                let shade = 1.0 - dist / radius * 0.6;
                let (glyph, color) = if seam {
                    ('▓', dim(palette.secondary, shade))
                } else {
                    ('█', dim(palette.primary, shade * 0.8))
                };
                if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                    cell.set_char(glyph).set_fg(color);
                }
            }
        }
    }

    /// Maps field units to a cell inside `area`, or `None` when outside.
    fn project(x: f32, y: f32, area: Rect) -> Option<(u16, u16)> {
        let u = (x / FIELD + 1.0) / 2.0;
        let v = (1.0 - (y / FIELD + 1.0) / 2.0).clamp(0.0, 1.0);
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let col = area.x + (u * f32::from(area.width)) as u16;
        let row = area.y + (v * f32::from(area.height)) as u16;
        if col >= area.x + area.width || row >= area.y + area.height {
            return None;
        }
        Some((col, row))
    }

    /// Inverse of `project` for the cell's center.
    fn unproject(col: u16, row: u16, area: Rect) -> (f32, f32) {
        let u = (f32::from(col) + 0.5) / f32::from(area.width.max(1));
        let v = (f32::from(row) + 0.5) / f32::from(area.height.max(1));
        (u.mul_add(2.0, -1.0) * FIELD, (1.0 - v).mul_add(2.0, -1.0) * FIELD)
    }
}

impl Default for BackgroundField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PointerPosition;

    #[test]
    fn test_particles_stay_in_field() {
        let mut field = BackgroundField::new();
        let signals = InputSignals::new();
        for _ in 0..600 {
            field.tick(0.033, &signals);
        }
        for particle in &field.particles {
            assert!(particle.x.abs() <= FIELD);
            assert!(particle.y.abs() <= FIELD);
        }
    }

    #[test]
    fn test_ball_settles_near_pointer_target() {
        let mut field = BackgroundField::new();
        let mut signals = InputSignals::new();
        signals.pointer = PointerPosition { x: 0.5, y: -0.5 };
        for _ in 0..600 {
            field.tick(0.033, &signals);
        }
        assert!((field.ball.x - 1.5).abs() < 0.5);
        assert!((field.ball.y - -1.5).abs() < 0.5);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        assert_eq!(mix(a, b, 0.5), Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_dim_scales_toward_black() {
        assert_eq!(dim(Color::Rgb(200, 100, 50), 0.0), Color::Rgb(0, 0, 0));
        assert_eq!(dim(Color::Rgb(200, 100, 50), 1.0), Color::Rgb(200, 100, 50));
    }

    #[test]
    fn test_project_round_trip_stays_in_area() {
        let area = Rect::new(0, 0, 80, 24);
        for &(x, y) in &[(0.0, 0.0), (-9.9, 9.9), (5.0, -5.0)] {
            let (col, row) = BackgroundField::project(x, y, area).unwrap();
            assert!(col < 80 && row < 24);
            let (fx, fy) = BackgroundField::unproject(col, row, area);
            assert!((fx - x).abs() < 0.5 * FIELD * 2.0 / 24.0 + 1.0);
            assert!((fy - y).abs() < 1.2);
        }
    }
}
