//! Hittable trait and HitRecord for ray-object intersection.

use crate::{Material, Plane, Sphere};
use umbra_math::{Ray, Vec3};

/// Record of a ray-object intersection.
///
/// Borrows the material from the object that was hit.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub p: Vec3,
    /// Surface normal at intersection (always points against ray)
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record at parameter `t`, orienting `outward_normal` against
    /// the ray.
    pub fn new(ray: &Ray, t: f64, outward_normal: Vec3, material: &'a Material) -> Self {
        Self {
            t,
            p: ray.at(t),
            normal: face_forward(outward_normal, ray.direction()),
            material,
        }
    }
}

/// Flip `normal` if it points along `dir`.
///
/// Surfaces are two-sided: the inside of the enclosing sphere is shaded
/// the same way as the outside of a ball.
#[inline]
pub(crate) fn face_forward(normal: Vec3, dir: Vec3) -> Vec3 {
    if normal.dot(dir) > 0.0 {
        -normal
    } else {
        normal
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Nearest forward intersection of `ray` with this object, if any.
    fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>>;
}

/// The closed set of primitives a scene can hold.
#[derive(Debug, Clone)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Hittable for Shape {
    #[inline]
    fn hit(&self, ray: &Ray) -> Option<HitRecord<'_>> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray),
            Shape::Plane(plane) => plane.hit(ray),
        }
    }
}

impl Shape {
    /// Every material this shape can report on a hit.
    pub fn materials(&self) -> Vec<&Material> {
        match self {
            Shape::Sphere(sphere) => sphere.materials(),
            Shape::Plane(plane) => vec![plane.material()],
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
