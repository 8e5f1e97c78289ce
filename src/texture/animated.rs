use crate::error::AnimationError;
use crate::map::direction::Direction;
use crate::texture::sprites::DirectionalFrames;

/// An ordered, cyclic sequence of image identifiers advanced by elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: &'static [&'static str],
    frame_duration: f32,
    current_frame: usize,
    time_bank: f32,
}

impl Animation {
    /// Creates an animation that advances one frame every `frame_duration` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError::InvalidFrameDuration`] if the duration is not positive and finite.
    pub fn new(frames: &'static [&'static str], frame_duration: f32) -> Result<Self, AnimationError> {
        if !frame_duration.is_finite() || frame_duration <= 0.0 {
            return Err(AnimationError::InvalidFrameDuration(frame_duration));
        }

        Ok(Self {
            frames,
            frame_duration,
            current_frame: 0,
            time_bank: 0.0,
        })
    }

    /// Banks `dt` seconds and steps forward once per whole frame duration banked.
    ///
    /// Sequences shorter than two frames never advance and bank nothing.
    pub fn tick(&mut self, dt: f32) {
        if self.frames.len() < 2 {
            return;
        }

        self.time_bank += dt;
        while self.time_bank >= self.frame_duration {
            self.time_bank -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.frames.len();
        }
    }

    /// The identifier at the current index, or `None` for an empty sequence.
    pub fn current_tile(&self) -> Option<&'static str> {
        self.frames.get(self.current_frame).copied()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn time_bank(&self) -> f32 {
        self.time_bank
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Idle and moving animations for each of the four facings.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalAnimation {
    idle: [Animation; 4],
    moving: [Animation; 4],
}

impl DirectionalAnimation {
    pub fn new(
        idle: &'static DirectionalFrames,
        moving: &'static DirectionalFrames,
        idle_duration: f32,
        moving_duration: f32,
    ) -> Result<Self, AnimationError> {
        let build = |frames: &'static DirectionalFrames, duration: f32| -> Result<[Animation; 4], AnimationError> {
            Ok([
                Animation::new(frames[Direction::Down.as_usize()], duration)?,
                Animation::new(frames[Direction::Left.as_usize()], duration)?,
                Animation::new(frames[Direction::Right.as_usize()], duration)?,
                Animation::new(frames[Direction::Up.as_usize()], duration)?,
            ])
        };

        Ok(Self {
            idle: build(idle, idle_duration)?,
            moving: build(moving, moving_duration)?,
        })
    }

    /// The animation shown for a facing, depending on whether the character is travelling.
    pub fn active(&self, direction: Direction, moving: bool) -> &Animation {
        if moving {
            &self.moving[direction.as_usize()]
        } else {
            &self.idle[direction.as_usize()]
        }
    }

    pub fn active_mut(&mut self, direction: Direction, moving: bool) -> &mut Animation {
        if moving {
            &mut self.moving[direction.as_usize()]
        } else {
            &mut self.idle[direction.as_usize()]
        }
    }
}
