pub fn disk_area(r: f64) -> f64 {
    r * r * core::f64::consts::PI
}

pub fn disk_circumference(r: f64) -> f64 {
    2. * r * core::f64::consts::PI
}

pub fn disk_diameter(r: f64) -> f64 {
    2. * r
}

/// One of the circle formulas which map a radius to a derived quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    Area,
    Circumference,
    Diameter,
}

impl Formula {
    /// All formulas in output order
    pub const ALL: [Formula; 3] = [Formula::Area, Formula::Circumference, Formula::Diameter];

    pub fn name(&self) -> &'static str {
        match self {
            Formula::Area => "area",
            Formula::Circumference => "circumference",
            Formula::Diameter => "diameter",
        }
    }

    pub fn apply(&self, radius: f64) -> f64 {
        match self {
            Formula::Area => disk_area(radius),
            Formula::Circumference => disk_circumference(radius),
            Formula::Diameter => disk_diameter(radius),
        }
    }

    pub fn as_fn(&self) -> fn(f64) -> f64 {
        match self {
            Formula::Area => disk_area,
            Formula::Circumference => disk_circumference,
            Formula::Diameter => disk_diameter,
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
