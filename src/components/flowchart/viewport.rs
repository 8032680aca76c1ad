/// Minimum zoom factor.
pub const MIN_ZOOM: f64 = 0.4;
/// Maximum zoom factor.
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom applied on load and by the reset control.
pub const DEFAULT_ZOOM: f64 = 0.8;

/// Zoom factor plus pan offset. One combined transform is applied to the
/// whole canvas layer, so relative node/edge geometry never changes with
/// zoom, only the screen projection does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub zoom: f64,
	pub pan_x: f64,
	pub pan_y: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			zoom: DEFAULT_ZOOM,
			pan_x: 0.0,
			pan_y: 0.0,
		}
	}
}

impl Viewport {
	/// Adjust zoom by `delta`, saturating at the `[MIN_ZOOM, MAX_ZOOM]`
	/// bounds. Repeated application at a bound is a no-op.
	pub fn zoom_by(&mut self, delta: f64) {
		self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
	}

	/// Restore the default zoom. Pan is left untouched.
	pub fn reset_zoom(&mut self) {
		self.zoom = DEFAULT_ZOOM;
	}

	/// CSS transform for the canvas layer: scale, then translate.
	pub fn css_transform(&self) -> String {
		format!(
			"scale({}) translate({}px, {}px)",
			self.zoom, self.pan_x, self.pan_y
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zoom_saturates_at_the_upper_bound() {
		let mut vp = Viewport::default();
		for _ in 0..15 {
			vp.zoom_by(0.1);
			assert!((MIN_ZOOM..=MAX_ZOOM).contains(&vp.zoom));
		}
		// Saturation lands on the bound exactly, not on accumulated float
		// cruft near it.
		assert_eq!(vp.zoom, 2.0);
		vp.zoom_by(0.1);
		assert_eq!(vp.zoom, 2.0);
	}

	#[test]
	fn zoom_saturates_at_the_lower_bound() {
		let mut vp = Viewport::default();
		for _ in 0..20 {
			vp.zoom_by(-0.1);
		}
		assert_eq!(vp.zoom, 0.4);
	}

	#[test]
	fn reset_restores_default_zoom_and_keeps_pan() {
		let mut vp = Viewport {
			zoom: 1.7,
			pan_x: 40.0,
			pan_y: -25.0,
		};
		vp.reset_zoom();
		assert_eq!(vp.zoom, DEFAULT_ZOOM);
		assert_eq!((vp.pan_x, vp.pan_y), (40.0, -25.0));

		vp.zoom_by(-10.0);
		vp.reset_zoom();
		assert_eq!(vp.zoom, DEFAULT_ZOOM);
	}

	#[test]
	fn transform_scales_then_translates() {
		let vp = Viewport {
			zoom: 0.8,
			pan_x: 12.0,
			pan_y: 0.0,
		};
		assert_eq!(vp.css_transform(), "scale(0.8) translate(12px, 0px)");
	}
}
