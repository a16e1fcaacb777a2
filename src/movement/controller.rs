//! Movement domain: the locomotion state machine.
//!
//! [`LocomotionController::tick`] runs once per fixed step, in this order:
//!
//! 1. timers
//! 2. contact probe
//! 3. dash
//! 4. grounding and wall contact edges
//! 5. wall slide
//! 6. wall grab
//! 7. jump, then fall shaping
//! 8. horizontal motion
//! 9. facing
//!
//! The order matters. A dash preempts steps 5 to 9 for every tick it is
//! active, and jump resolution must see this tick's contacts.

use bevy::prelude::*;

use crate::movement::math::{finite_or_zero, move_towards, move_towards_vec};
use crate::movement::{ContactProbe, ContactState, InputFrame, MovementConfig, TimerSet, WallSide};

/// Smoothed input inside this band never changes facing.
pub const FACING_DEAD_ZONE: f32 = 0.01;
/// Climbing speed relative to descending speed while grabbing.
pub const CLIMB_DAMPING: f32 = 0.8;
/// Share of `movement_acceleration` available while airborne.
pub const AIR_ACCELERATION_FACTOR: f32 = 0.5;

/// Orthogonal locomotion flags. Mutated only through the named transitions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LocomotionFlags {
    /// Set by any jump, cleared on landing.
    pub has_jumped: bool,
    /// The dash charge is spent.
    pub has_dashed: bool,
    pub is_dashing: bool,
    pub is_wall_sliding: bool,
    pub is_wall_grabbing: bool,
}

impl LocomotionFlags {
    pub fn can_dash(&self) -> bool {
        !self.has_dashed && !self.is_dashing
    }

    pub fn begin_dash(&mut self) {
        self.is_dashing = true;
        self.has_dashed = true;
    }

    /// A dash that ends on the ground gets its charge back immediately.
    pub fn end_dash(&mut self, grounded: bool) {
        self.is_dashing = false;
        if grounded {
            self.has_dashed = false;
        }
    }

    pub fn cancel_dash(&mut self) {
        self.is_dashing = false;
    }

    pub fn land(&mut self) {
        self.has_jumped = false;
        self.has_dashed = false;
    }

    pub fn mark_jumped(&mut self) {
        self.has_jumped = true;
    }

    /// Returns true on the rising edge.
    pub fn enter_wall_slide(&mut self) -> bool {
        let entered = !self.is_wall_sliding;
        self.is_wall_sliding = true;
        entered
    }

    /// Sliding persists while grabbing. Returns true if the slide ended.
    pub fn leave_wall_slide(&mut self) -> bool {
        if self.is_wall_sliding && !self.is_wall_grabbing {
            self.is_wall_sliding = false;
            return true;
        }
        false
    }

    /// Returns true if the grab state changed.
    pub fn set_wall_grab(&mut self, grabbing: bool) -> bool {
        let changed = self.is_wall_grabbing != grabbing;
        self.is_wall_grabbing = grabbing;
        changed
    }
}

/// What the controller hands to the physics body each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    /// +1 facing right, -1 facing left.
    pub facing: f32,
    /// Rate (units/s) at which velocity approaches its horizontal target.
    pub current_lerp_speed: f32,
}

impl MotionState {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            facing: 1.0,
            current_lerp_speed: config.movement_lerp_speed,
        }
    }
}

/// Animation triggers (one-shot) and levels (persist until changed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSignal {
    JumpAscend,
    Land,
    Falling(bool),
    Running(bool),
}

impl AnimationSignal {
    pub fn name(&self) -> &'static str {
        match self {
            AnimationSignal::JumpAscend => "jump_ascend",
            AnimationSignal::Land => "land",
            AnimationSignal::Falling(_) => "falling",
            AnimationSignal::Running(_) => "running",
        }
    }

    /// One-shot signals, as opposed to levels that persist until changed.
    pub fn is_trigger(&self) -> bool {
        matches!(self, AnimationSignal::JumpAscend | AnimationSignal::Land)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    /// Jump inside the grace window after walking off a ledge.
    Coyote,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionEvent {
    Animation(AnimationSignal),
    Jumped(JumpKind),
    Landed,
    LeftGround,
    DashStarted { direction: Vec2 },
    DashStopped { cancelled: bool },
    WallSlideStarted(WallSide),
    WallSlideStopped,
}

/// Body state read back from the physics world before a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Center of the character's bounds.
    pub position: Vec2,
    /// Full size of the character's bounds.
    pub bounds: Vec2,
    pub velocity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub dt: f32,
    /// World gravity along y, negative for downward.
    pub gravity_y: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickOutput {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub facing: f32,
    pub events: Vec<LocomotionEvent>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct AnimationLevels {
    falling: bool,
    running: bool,
    ascend_signaled: bool,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    config: MovementConfig,
    pub timers: TimerSet,
    pub flags: LocomotionFlags,
    pub motion: MotionState,
    /// Snapshot from the most recent tick.
    pub contacts: ContactState,
    dash_direction: Vec2,
    animation: AnimationLevels,
}

impl LocomotionController {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            motion: MotionState::new(&config),
            config,
            timers: TimerSet::default(),
            flags: LocomotionFlags::default(),
            contacts: ContactState::default(),
            dash_direction: Vec2::ZERO,
            animation: AnimationLevels::default(),
        }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Swap tunables without resetting any runtime state.
    pub fn reconfigure(&mut self, config: MovementConfig) {
        self.config = config;
    }

    pub fn dash_direction(&self) -> Vec2 {
        self.dash_direction
    }

    pub fn tick<P: ContactProbe + ?Sized>(
        &mut self,
        input: &InputFrame,
        probe: &P,
        body: BodyState,
        ctx: TickContext,
    ) -> TickOutput {
        let mut events = Vec::new();
        self.motion.velocity = body.velocity;

        self.timers.advance(ctx.dt, &self.contacts, input, &self.flags, &self.config);
        let contacts = probe.contacts(body.position, body.bounds);

        let dash_owned = self.resolve_dash(input, &contacts, &mut events);
        let pushing = self.update_contacts(contacts, input, &mut events);

        if !dash_owned {
            self.resolve_wall_slide(pushing, &mut events);
            self.resolve_wall_grab(input);
            self.resolve_jump(input, ctx, &mut events);
            self.move_horizontally(input, ctx.dt);
            self.update_facing(input);
        }

        self.update_animation(input, &mut events);
        self.sanitize();

        TickOutput {
            velocity: self.motion.velocity,
            gravity_scale: self.motion.gravity_scale,
            facing: self.motion.facing,
            events,
        }
    }

    /// Returns true when the dash owns this tick's velocity.
    fn resolve_dash(
        &mut self,
        input: &InputFrame,
        contacts: &ContactState,
        events: &mut Vec<LocomotionEvent>,
    ) -> bool {
        if input.dash_pressed && self.flags.can_dash() {
            let raw = Vec2::new(input.horizontal_raw, input.vertical_raw).normalize_or_zero();
            self.dash_direction = if raw == Vec2::ZERO {
                Vec2::new(self.motion.facing, 0.0)
            } else {
                raw
            };
            self.flags.begin_dash();
            self.timers.dash_elapsed = 0.0;
            debug!("Dash started: direction={:?}", self.dash_direction);
            events.push(LocomotionEvent::DashStarted {
                direction: self.dash_direction,
            });
        }

        if !self.flags.is_dashing {
            return false;
        }

        self.motion.velocity = self.dash_direction * self.config.dash_speed;
        self.motion.gravity_scale = 0.0;

        if self.timers.dash_expired(&self.config) {
            self.flags.end_dash(contacts.grounded);
            self.motion.velocity.y = self
                .motion
                .velocity
                .y
                .min(self.config.dash_exit_vertical_cap);
            self.motion.gravity_scale = 1.0;
            debug!(
                "Dash ended: elapsed={:.3}, grounded={}, has_dashed={}",
                self.timers.dash_elapsed, contacts.grounded, self.flags.has_dashed
            );
            events.push(LocomotionEvent::DashStopped { cancelled: false });
        }

        true
    }

    /// Applies grounding edges and returns the wall being pushed into, if any.
    fn update_contacts(
        &mut self,
        contacts: ContactState,
        input: &InputFrame,
        events: &mut Vec<LocomotionEvent>,
    ) -> Option<WallSide> {
        let was_grounded = self.contacts.grounded;
        self.contacts = contacts;

        if contacts.grounded && !was_grounded {
            self.flags.land();
            self.motion.current_lerp_speed = self.config.movement_lerp_speed;
            self.timers.left_ground_at = None;
            events.push(LocomotionEvent::Landed);
            if self.animation.falling {
                self.animation.falling = false;
                events.push(LocomotionEvent::Animation(AnimationSignal::Land));
                events.push(LocomotionEvent::Animation(AnimationSignal::Falling(false)));
            }
            debug!("Landed: has_jumped and has_dashed cleared");
        } else if !contacts.grounded && was_grounded {
            self.timers.left_ground_at = Some(self.timers.now);
            events.push(LocomotionEvent::LeftGround);
            if contacts.touching_wall() && self.flags.is_dashing {
                self.flags.cancel_dash();
                self.motion.gravity_scale = 1.0;
                events.push(LocomotionEvent::DashStopped { cancelled: true });
                debug!("Dash cancelled: left ground against a wall");
            }
            debug!("Left ground at t={:.3}", self.timers.now);
        }

        if contacts.left_wall && input.horizontal < 0.0 {
            Some(WallSide::Left)
        } else if contacts.right_wall && input.horizontal > 0.0 {
            Some(WallSide::Right)
        } else {
            None
        }
    }

    fn resolve_wall_slide(
        &mut self,
        pushing: Option<WallSide>,
        events: &mut Vec<LocomotionEvent>,
    ) {
        match pushing {
            Some(side) => {
                if self.flags.enter_wall_slide() {
                    // Only once falling, so a jump launched against the wall keeps its rise.
                    if self.motion.velocity.y < 0.0 {
                        self.motion.velocity.y = -self.config.slide_speed;
                    }
                    debug!("Wall slide started: side={:?}", side);
                    events.push(LocomotionEvent::WallSlideStarted(side));
                }
            }
            None => {
                if self.flags.leave_wall_slide() {
                    debug!("Wall slide stopped");
                    events.push(LocomotionEvent::WallSlideStopped);
                }
            }
        }
    }

    fn resolve_wall_grab(&mut self, input: &InputFrame) {
        let grabbing = self.contacts.touching_wall() && !self.timers.wall_jump_locked();
        if self.flags.set_wall_grab(grabbing) {
            debug!("Wall grab: {}", grabbing);
        }

        self.motion.gravity_scale = if grabbing || self.contacts.grounded {
            0.0
        } else {
            1.0
        };

        if grabbing {
            let vertical = input.vertical_raw;
            let damping = if vertical < 0.0 { 1.0 } else { CLIMB_DAMPING };
            self.motion.velocity = Vec2::new(0.0, vertical * self.config.slide_speed * damping);
        }
    }

    fn resolve_jump(
        &mut self,
        input: &InputFrame,
        ctx: TickContext,
        events: &mut Vec<LocomotionEvent>,
    ) {
        let contacts = self.contacts;
        let airborne_on_wall = !contacts.grounded && contacts.touching_wall();
        let jump_signal = input.any_jump_pressed() || self.timers.jump_buffer_counter > 0.0;

        if input.jump_pressed && (self.flags.is_wall_grabbing || airborne_on_wall) {
            let half = self.config.jump_force * 0.5;
            let away = match contacts.wall_side() {
                Some(WallSide::Left) => half,
                _ => -half,
            };
            self.timers.start_wall_jump_lock(&self.config);
            self.motion.current_lerp_speed = self.config.wall_jump_movement_lerp;
            self.flags.set_wall_grab(false);
            if !contacts.grounded {
                self.motion.gravity_scale = 1.0;
            }
            self.execute_jump(Vec2::new(away, half), JumpKind::Wall, events);
        } else if jump_signal
            && (contacts.grounded || self.timers.can_jump())
            && !self.flags.has_jumped
        {
            let kind = if contacts.grounded {
                JumpKind::Ground
            } else {
                JumpKind::Coyote
            };
            let launch = Vec2::new(self.motion.velocity.x, self.config.jump_force);
            self.execute_jump(launch, kind, events);
        }

        // Fall shaping is extra gravity, so it follows the gravity scale.
        let vy = self.motion.velocity.y;
        let unsustained_rise = vy > 0.0 && !input.sustain_held;
        if self.motion.gravity_scale > 0.0
            && (vy < self.config.jump_velocity_falloff || unsustained_rise)
        {
            self.motion.velocity.y += self.config.fall_multiplier * ctx.gravity_y * ctx.dt;
        }
    }

    fn execute_jump(
        &mut self,
        velocity: Vec2,
        kind: JumpKind,
        events: &mut Vec<LocomotionEvent>,
    ) {
        self.motion.velocity = velocity;
        self.flags.mark_jumped();
        self.timers.consume_jump_buffer();
        self.animation.ascend_signaled = true;
        debug!("{:?} jump: velocity={:?}", kind, velocity);
        events.push(LocomotionEvent::Jumped(kind));
        events.push(LocomotionEvent::Animation(AnimationSignal::JumpAscend));
    }

    fn move_horizontally(&mut self, input: &InputFrame, dt: f32) {
        self.motion.current_lerp_speed = move_towards(
            self.motion.current_lerp_speed,
            self.config.movement_lerp_speed,
            self.config.wall_jump_movement_lerp * dt,
        );

        let acceleration = if self.contacts.grounded {
            self.config.movement_acceleration
        } else {
            self.config.movement_acceleration * AIR_ACCELERATION_FACTOR
        };
        let drive = horizontal_drive(input.horizontal, self.motion.velocity.x, acceleration * dt);

        let ideal = Vec2::new(drive * self.config.walk_speed, self.motion.velocity.y);
        self.motion.velocity = move_towards_vec(
            self.motion.velocity,
            ideal,
            self.motion.current_lerp_speed * dt,
        );
    }

    fn update_facing(&mut self, input: &InputFrame) {
        if input.horizontal > FACING_DEAD_ZONE {
            self.motion.facing = 1.0;
        } else if input.horizontal < -FACING_DEAD_ZONE {
            self.motion.facing = -1.0;
        }
    }

    fn update_animation(&mut self, input: &InputFrame, events: &mut Vec<LocomotionEvent>) {
        let grounded = self.contacts.grounded;
        let grabbing = self.flags.is_wall_grabbing;
        let vy = self.motion.velocity.y;

        if vy <= 0.0 {
            self.animation.ascend_signaled = false;
        } else if !grounded && !grabbing && self.flags.has_jumped && !self.animation.ascend_signaled
        {
            self.animation.ascend_signaled = true;
            events.push(LocomotionEvent::Animation(AnimationSignal::JumpAscend));
        }

        let falling = !grounded && !grabbing && vy < 0.0;
        if falling != self.animation.falling {
            self.animation.falling = falling;
            events.push(LocomotionEvent::Animation(AnimationSignal::Falling(falling)));
        }

        let running = grounded && input.horizontal_raw != 0.0;
        if running != self.animation.running {
            self.animation.running = running;
            events.push(LocomotionEvent::Animation(AnimationSignal::Running(running)));
        }
    }

    fn sanitize(&mut self) {
        if !self.motion.velocity.is_finite() {
            warn!(
                "Non-finite velocity {:?}, clamping to zero",
                self.motion.velocity
            );
            self.motion.velocity = finite_or_zero(self.motion.velocity);
        }
        if !self.motion.gravity_scale.is_finite() {
            warn!(
                "Non-finite gravity scale {}, clamping to zero",
                self.motion.gravity_scale
            );
            self.motion.gravity_scale = 0.0;
        }
    }
}

/// Ramp the horizontal drive toward full input. Reversing against current
/// motion restarts the ramp from zero.
fn horizontal_drive(input: f32, velocity_x: f32, step: f32) -> f32 {
    if input < 0.0 {
        let start = if velocity_x > 0.0 { 0.0 } else { input };
        move_towards(start, -1.0, step)
    } else if input > 0.0 {
        let start = if velocity_x < 0.0 { 0.0 } else { input };
        move_towards(start, 1.0, step)
    } else {
        0.0
    }
}
