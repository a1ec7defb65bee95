use crate::colour::*;
use crate::objects::*;
use crate::ray::*;
use crate::vec3::*;

// camera placement and the objects to draw; objects are only ever appended
#[derive(Clone, Debug)]
pub struct Scene {
    from: Point3,
    at: Point3,
    background: Colour,
    objects: Vec<Primitive>,
}

impl Default for Scene {
    fn default() -> Self {
	Scene::new()
    }
}

impl Scene {
    pub fn new() -> Self {
	Scene {
	    from: Point3::new(0.0, -10.0, 0.0),
	    at: Point3::ORIGIN,
	    background: BLACK,
	    objects: Vec::new(),
	}
    }

    // camera origin
    pub fn from(&mut self, point: Point3) -> &mut Self {
	self.from = point;
	self
    }

    // camera look-at target
    pub fn at(&mut self, point: Point3) -> &mut Self {
	self.at = point;
	self
    }

    pub fn add(&mut self, object: impl Into<Primitive>) -> &mut Self {
	self.objects.push(object.into());
	self
    }

    pub fn set_background(&mut self, colour: Colour) -> &mut Self {
	self.background = colour;
	self
    }

    pub fn camera_from(&self) -> Point3 {
	self.from
    }

    pub fn camera_at(&self) -> Point3 {
	self.at
    }

    // not yet orthonormalised, the renderer builds the image basis from this
    pub fn view_direction(&self) -> Vec3 {
	self.at - self.from
    }

    pub fn background(&self) -> Colour {
	self.background
    }

    pub fn objects(&self) -> &[Primitive] {
	&self.objects
    }

    // for moving objects between renders; the length cannot change
    pub fn objects_mut(&mut self) -> &mut [Primitive] {
	&mut self.objects
    }

    pub fn number_of_objects(&self) -> usize {
	self.objects.len()
    }

    // brute force; each hit shrinks the range so later objects must be nearer
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
	let mut range = 0.0..f64::INFINITY;
	let mut best: Option<Hit> = None;
	for object in &self.objects {
	    if let Some(hit) = object.hit(ray, range.clone()) {
		range.end = hit.t;
		best = Some(hit);
	    }
	}
	best
    }

    // flat shading, the nearest object's colour or the background
    pub fn trace(&self, ray: &Ray) -> Colour {
	match self.nearest_hit(ray) {
	    Some(hit) => hit.colour,
	    None => self.background,
	}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_placement() {
	let mut scene = Scene::new();
	scene.from(Point3::new(1.0, 2.0, 3.0)).at(Point3::new(1.0, 5.0, 3.0));
	assert_eq!(scene.camera_from(), Point3::new(1.0, 2.0, 3.0));
	assert_eq!(scene.camera_at(), Point3::new(1.0, 5.0, 3.0));
	assert_eq!(scene.view_direction(), Vec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_add_keeps_order_and_duplicates() {
	let sphere = Sphere::new(Point3::ORIGIN, 1.0).unwrap();
	let mut scene = Scene::new();
	scene.add(sphere).add(sphere).add(Plane::new(Point3::ORIGIN, Vec3::Z).unwrap());
	assert_eq!(scene.number_of_objects(), 3);
	assert!(matches!(scene.objects()[0], Primitive::Sphere(_)));
	assert!(matches!(scene.objects()[2], Primitive::Plane(_)));
    }

    #[test]
    fn test_nearest_hit_ignores_insertion_order() {
	let far = Sphere::new(Point3::new(0.0, 10.0, 0.0), 1.0).unwrap().with_colour(RED);
	let near = Sphere::new(Point3::new(0.0, 5.0, 0.0), 1.0).unwrap().with_colour(GREEN);
	let ray = Ray::new(Point3::ORIGIN, Vec3::Y).unwrap();

	let mut scene = Scene::new();
	scene.add(far).add(near);
	assert_eq!(scene.nearest_hit(&ray).unwrap().t, 4.0);
	assert_eq!(scene.trace(&ray), GREEN);

	let mut reversed = Scene::new();
	reversed.add(near).add(far);
	assert_eq!(reversed.trace(&ray), GREEN);
    }

    #[test]
    fn test_miss_is_background() {
	let mut scene = Scene::new();
	scene.set_background(CYAN);
	scene.add(Sphere::new(Point3::new(0.0, 5.0, 0.0), 1.0).unwrap());
	let ray = Ray::new(Point3::ORIGIN, -Vec3::Y).unwrap();
	assert!(scene.nearest_hit(&ray).is_none());
	assert_eq!(scene.trace(&ray), CYAN);
    }

    #[test]
    fn test_objects_can_move_between_renders() {
	let mut scene = Scene::new();
	scene.add(Sphere::new(Point3::new(1.0, 2.0, 3.0), 5.0).unwrap());
	scene.objects_mut()[0].move_by(Vec3::new(2.0, 3.0, 4.0));
	assert_eq!(scene.objects()[0].position(), Point3::new(3.0, 5.0, 7.0));
    }
}
