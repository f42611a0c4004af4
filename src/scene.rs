use crate::{
    primitives::{Intersect, Primitive},
    ray::{Hit, Ray},
};

/// Every primitive in the world, tested one after another.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl Intersect for Scene {
    fn intersection(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<Hit> {
        let mut closest = None;
        let mut t_closest = t_max;

        // Each hit narrows the search to strictly nearer surfaces
        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersection(ray, t_min, t_closest) {
                t_closest = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }
}
