/// A wheel as the engine sees it: rim diameter plus tire height.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Wheel {
    diameter: f64,
    tire_width: f64,
}

impl Wheel {
    pub fn new(diameter: f64, tire_width: f64) -> Self {
        Self {
            diameter,
            tire_width,
        }
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn tire_width(&self) -> f64 {
        self.tire_width
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Axle to ground.
    pub fn radius_with_tire(&self) -> f64 {
        self.radius() + self.tire_width
    }
}
