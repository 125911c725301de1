use std::{rc::Rc, time::Duration};

/// Animates the opacity of a floating element between two values.
pub trait OpacityTransition {
	/// How long a full transition takes.
	fn duration(&self) -> Duration;

	/// The opacity `elapsed` into a transition from `from` to `to`.
	fn opacity_at(&self, from: f64, to: f64, elapsed: Duration) -> f64;
}

impl<T> OpacityTransition for Rc<T>
where
	T: OpacityTransition + ?Sized,
{
	fn duration(&self) -> Duration {
		(**self).duration()
	}

	fn opacity_at(&self, from: f64, to: f64, elapsed: Duration) -> f64 {
		(**self).opacity_at(from, to, elapsed)
	}
}

/// Timing curve of a [`Fade`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
	/// Constant speed
	Linear,
	/// Slow at both ends. This is the default.
	#[default]
	EaseInOut,
}

impl Easing {
	/// Maps progress through the transition, in `0..=1`, onto progress
	/// through the value range.
	pub fn apply(self, progress: f64) -> f64 {
		let t = progress.clamp(0., 1.);
		match self {
			Self::Linear => t,
			Self::EaseInOut if t < 0.5 => 2. * t * t,
			Self::EaseInOut => 1. - (-2. * t + 2.).powi(2) / 2.,
		}
	}
}

/// A plain opacity fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fade {
	/// Length of the fade
	pub duration: Duration,
	/// Timing curve
	pub easing: Easing,
}

impl Default for Fade {
	fn default() -> Self {
		Self {
			duration: Duration::from_millis(200),
			easing: Easing::default(),
		}
	}
}

impl OpacityTransition for Fade {
	fn duration(&self) -> Duration {
		self.duration
	}

	fn opacity_at(&self, from: f64, to: f64, elapsed: Duration) -> f64 {
		if self.duration.is_zero() {
			return to;
		}

		let progress = elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64;
		from + (to - from) * self.easing.apply(progress)
	}
}

/// Steps an [`OpacityTransition`] frame by frame, producing the opacity the
/// floating element should have at each frame.
#[derive(Debug, Clone)]
pub struct OpacityAnimator<T> {
	transition: T,
	from: f64,
	to: f64,
	current: f64,
	elapsed: Duration,
}

impl<T> OpacityAnimator<T>
where
	T: OpacityTransition,
{
	/// A settled animator at opacity 0.
	pub fn new(transition: T) -> Self {
		let elapsed = transition.duration();
		Self {
			transition,
			from: 0.,
			to: 0.,
			current: 0.,
			elapsed,
		}
	}

	/// Starts animating towards `to` from wherever the opacity is now.
	pub fn retarget(&mut self, to: f64) {
		if to == self.to {
			return;
		}

		self.from = self.current;
		self.to = to;
		self.elapsed = Duration::ZERO;
	}

	/// Moves the animation `delta` forward and returns the new opacity.
	pub fn advance(&mut self, delta: Duration) -> f64 {
		if self.is_settled() {
			self.current = self.to;
			return self.current;
		}

		self.elapsed = (self.elapsed + delta).min(self.transition.duration());
		self.current = if self.is_settled() {
			self.to
		} else {
			self.transition.opacity_at(self.from, self.to, self.elapsed)
		};

		self.current
	}

	/// The opacity as of the last frame.
	pub fn current(&self) -> f64 {
		self.current
	}

	/// The opacity the animation is heading to.
	pub fn target(&self) -> f64 {
		self.to
	}

	/// Whether the animation has reached its target.
	pub fn is_settled(&self) -> bool {
		self.elapsed >= self.transition.duration()
	}
}

#[cfg(test)]
mod test {
	use std::{rc::Rc, time::Duration};

	use super::{Easing, Fade, OpacityAnimator, OpacityTransition};

	const FRAME: Duration = Duration::from_millis(50);

	fn linear() -> Fade {
		Fade {
			easing: Easing::Linear,
			..Fade::default()
		}
	}

	#[test]
	fn starts_hidden_and_settled() {
		let animator = OpacityAnimator::new(Fade::default());
		assert_eq!(animator.current(), 0.);
		assert!(animator.is_settled());
	}

	#[test]
	fn fades_in_over_the_duration() {
		let mut animator = OpacityAnimator::new(linear());
		animator.retarget(1.);
		assert!(!animator.is_settled());

		let frames = (0..4).map(|_| animator.advance(FRAME)).collect::<Vec<_>>();
		assert_eq!(frames, [0.25, 0.5, 0.75, 1.]);
		assert!(animator.is_settled());
		assert_eq!(animator.advance(FRAME), 1.);
	}

	#[test]
	fn reversing_mid_flight_starts_from_current_opacity() {
		let mut animator = OpacityAnimator::new(linear());
		animator.retarget(1.);
		animator.advance(FRAME * 2);
		assert_eq!(animator.current(), 0.5);

		animator.retarget(0.);
		assert_eq!(animator.advance(FRAME * 2), 0.25);
		assert_eq!(animator.advance(FRAME * 10), 0.);
		assert_eq!(animator.target(), 0.);
	}

	#[test]
	fn retargeting_to_the_same_value_keeps_progress() {
		let mut animator = OpacityAnimator::new(linear());
		animator.retarget(1.);
		animator.advance(FRAME);
		animator.retarget(1.);
		assert_eq!(animator.advance(FRAME), 0.5);
	}

	#[test]
	fn ease_in_out_is_symmetric() {
		let easing = Easing::EaseInOut;
		assert_eq!(easing.apply(0.), 0.);
		assert_eq!(easing.apply(0.5), 0.5);
		assert_eq!(easing.apply(1.), 1.);
		assert!((easing.apply(0.25) + easing.apply(0.75) - 1.).abs() < 1e-9);
		assert!(easing.apply(0.25) < 0.25);
	}

	#[test]
	fn zero_duration_jumps_to_target() {
		let fade = Fade {
			duration: Duration::ZERO,
			..Fade::default()
		};
		assert_eq!(fade.opacity_at(0., 1., Duration::ZERO), 1.);

		let mut animator = OpacityAnimator::new(fade);
		animator.retarget(1.);
		assert!(animator.is_settled());
		assert_eq!(animator.advance(FRAME), 1.);
	}

	#[test]
	fn shared_transitions_animate_through_rc() {
		let transition: Rc<dyn OpacityTransition> = Rc::new(linear());
		let mut animator = OpacityAnimator::new(transition);
		animator.retarget(1.);
		assert_eq!(animator.advance(FRAME * 2), 0.5);
	}
}
