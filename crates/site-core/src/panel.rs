//! Debug panel bindings onto the water uniforms.
//!
//! Each control maps a display name to one field of [`WaterUniforms`] plus a
//! numeric range. Writes are synchronous: the next frame packs whatever the
//! panel last wrote.

use crate::color::Color;
use crate::error::{Result, SiteError};
use crate::water::WaterUniforms;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ControlRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max && self.step > 0.0
    }

    /// Clamp into range and snap to the nearest step counted from `min`.
    pub fn quantize(&self, value: f32) -> f32 {
        if !value.is_finite() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UniformControl {
    BigWavesElevation,
    BigWavesFrequencyX,
    BigWavesFrequencyY,
    BigWavesSpeed,
    SmallWavesElevation,
    SmallWavesFrequency,
    SmallWavesSpeed,
    SmallIterations,
    ColorOffset,
    ColorMultiplier,
}

impl UniformControl {
    pub const ALL: [UniformControl; 10] = [
        UniformControl::BigWavesElevation,
        UniformControl::BigWavesFrequencyX,
        UniformControl::BigWavesFrequencyY,
        UniformControl::BigWavesSpeed,
        UniformControl::SmallWavesElevation,
        UniformControl::SmallWavesFrequency,
        UniformControl::SmallWavesSpeed,
        UniformControl::SmallIterations,
        UniformControl::ColorOffset,
        UniformControl::ColorMultiplier,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UniformControl::BigWavesElevation => "uBigWavesElevation",
            UniformControl::BigWavesFrequencyX => "uBigWavesFrequencyX",
            UniformControl::BigWavesFrequencyY => "uBigWavesFrequencyY",
            UniformControl::BigWavesSpeed => "uBigWavesSpeed",
            UniformControl::SmallWavesElevation => "uSmallWavesElevation",
            UniformControl::SmallWavesFrequency => "uSmallWavesFrequency",
            UniformControl::SmallWavesSpeed => "uSmallWavesSpeed",
            UniformControl::SmallIterations => "uSmallIterations",
            UniformControl::ColorOffset => "uColorOffset",
            UniformControl::ColorMultiplier => "uColorMultiplier",
        }
    }

    pub fn range(self) -> ControlRange {
        match self {
            UniformControl::BigWavesElevation => ControlRange::new(0.0, 1.0, 0.001),
            UniformControl::BigWavesFrequencyX => ControlRange::new(0.0, 10.0, 0.001),
            UniformControl::BigWavesFrequencyY => ControlRange::new(0.0, 10.0, 0.001),
            UniformControl::BigWavesSpeed => ControlRange::new(0.0, 4.0, 0.001),
            UniformControl::SmallWavesElevation => ControlRange::new(0.0, 1.0, 0.001),
            UniformControl::SmallWavesFrequency => ControlRange::new(0.0, 30.0, 0.001),
            UniformControl::SmallWavesSpeed => ControlRange::new(0.0, 4.0, 0.001),
            UniformControl::SmallIterations => ControlRange::new(0.0, 5.0, 1.0),
            UniformControl::ColorOffset => ControlRange::new(0.0, 1.0, 0.001),
            UniformControl::ColorMultiplier => ControlRange::new(0.0, 10.0, 0.001),
        }
    }

    fn slot(self, u: &mut WaterUniforms) -> &mut f32 {
        match self {
            UniformControl::BigWavesElevation => &mut u.big_waves_elevation,
            UniformControl::BigWavesFrequencyX => &mut u.big_waves_frequency.x,
            UniformControl::BigWavesFrequencyY => &mut u.big_waves_frequency.y,
            UniformControl::BigWavesSpeed => &mut u.big_waves_speed,
            UniformControl::SmallWavesElevation => &mut u.small_waves_elevation,
            UniformControl::SmallWavesFrequency => &mut u.small_waves_frequency,
            UniformControl::SmallWavesSpeed => &mut u.small_waves_speed,
            UniformControl::SmallIterations => &mut u.small_iterations,
            UniformControl::ColorOffset => &mut u.color_offset,
            UniformControl::ColorMultiplier => &mut u.color_multiplier,
        }
    }

    pub fn read(self, u: &WaterUniforms) -> f32 {
        match self {
            UniformControl::BigWavesElevation => u.big_waves_elevation,
            UniformControl::BigWavesFrequencyX => u.big_waves_frequency.x,
            UniformControl::BigWavesFrequencyY => u.big_waves_frequency.y,
            UniformControl::BigWavesSpeed => u.big_waves_speed,
            UniformControl::SmallWavesElevation => u.small_waves_elevation,
            UniformControl::SmallWavesFrequency => u.small_waves_frequency,
            UniformControl::SmallWavesSpeed => u.small_waves_speed,
            UniformControl::SmallIterations => u.small_iterations,
            UniformControl::ColorOffset => u.color_offset,
            UniformControl::ColorMultiplier => u.color_multiplier,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorControl {
    Depth,
    Surface,
}

impl ColorControl {
    pub const ALL: [ColorControl; 2] = [ColorControl::Depth, ColorControl::Surface];

    pub fn name(self) -> &'static str {
        match self {
            ColorControl::Depth => "depthColor",
            ColorControl::Surface => "surfaceColor",
        }
    }

    pub fn read(self, u: &WaterUniforms) -> Color {
        match self {
            ColorControl::Depth => u.depth_color,
            ColorControl::Surface => u.surface_color,
        }
    }
}

pub struct DebugPanel {
    by_name: FnvHashMap<&'static str, UniformControl>,
    collapsed: bool,
}

impl Default for DebugPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugPanel {
    /// New panels start collapsed.
    pub fn new() -> Self {
        let by_name = UniformControl::ALL
            .iter()
            .map(|c| (c.name(), *c))
            .collect::<FnvHashMap<_, _>>();
        Self {
            by_name,
            collapsed: true,
        }
    }

    pub fn controls(&self) -> &'static [UniformControl] {
        &UniformControl::ALL
    }

    pub fn color_controls(&self) -> &'static [ColorControl] {
        &ColorControl::ALL
    }

    pub fn lookup(&self, name: &str) -> Result<UniformControl> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| SiteError::UnknownControl(name.to_string()))
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Writes the quantized value and returns what was stored.
    pub fn apply(&self, uniforms: &mut WaterUniforms, control: UniformControl, value: f32) -> f32 {
        let stored = control.range().quantize(value);
        *control.slot(uniforms) = stored;
        stored
    }

    pub fn apply_named(&self, uniforms: &mut WaterUniforms, name: &str, value: f32) -> Result<f32> {
        let control = self.lookup(name)?;
        Ok(self.apply(uniforms, control, value))
    }

    pub fn apply_color(
        &self,
        uniforms: &mut WaterUniforms,
        control: ColorControl,
        hex: &str,
    ) -> Result<Color> {
        let color = Color::from_hex(hex)?;
        match control {
            ColorControl::Depth => uniforms.depth_color = color,
            ColorControl::Surface => uniforms.surface_color = color,
        }
        Ok(color)
    }
}
