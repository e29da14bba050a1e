//! Power-up kinds and the shared power-up countdown
//!
//! One weapon slot and one utility slot share a single timer. Any pickup
//! resets the timer; when it runs out both slots clear together.

use super::entities::Color;
use crate::consts::POWER_UP_DURATION_TICKS;

/// Weapon power-ups (change the fire pattern)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponKind {
    DoubleShot,
    TripleShot,
    DiagonalSpread,
    WideSpread,
}

/// Utility power-ups (change the rules around the player)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityKind {
    DoubleSpeed,
    Immunity,
    TimeSlow,
}

/// Any collectible power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Weapon(WeaponKind),
    Utility(UtilityKind),
}

impl PowerUpKind {
    /// Every kind, in spawn-table order
    pub const ALL: [PowerUpKind; 7] = [
        PowerUpKind::Weapon(WeaponKind::DoubleShot),
        PowerUpKind::Weapon(WeaponKind::TripleShot),
        PowerUpKind::Weapon(WeaponKind::DiagonalSpread),
        PowerUpKind::Weapon(WeaponKind::WideSpread),
        PowerUpKind::Utility(UtilityKind::DoubleSpeed),
        PowerUpKind::Utility(UtilityKind::Immunity),
        PowerUpKind::Utility(UtilityKind::TimeSlow),
    ];

    /// Spawn weight of each kind (sums to 1.0)
    pub fn spawn_weight(&self) -> f32 {
        match self {
            PowerUpKind::Weapon(WeaponKind::DoubleShot) => 0.18,
            PowerUpKind::Weapon(WeaponKind::TripleShot) => 0.18,
            PowerUpKind::Weapon(WeaponKind::DiagonalSpread) => 0.16,
            PowerUpKind::Weapon(WeaponKind::WideSpread) => 0.16,
            PowerUpKind::Utility(UtilityKind::DoubleSpeed) => 0.14,
            PowerUpKind::Utility(UtilityKind::Immunity) => 0.09,
            PowerUpKind::Utility(UtilityKind::TimeSlow) => 0.09,
        }
    }

    /// Pick a kind from a uniform roll in [0, 1)
    pub fn from_roll(roll: f32) -> PowerUpKind {
        let mut acc = 0.0;
        for kind in Self::ALL {
            acc += kind.spawn_weight();
            if roll < acc {
                return kind;
            }
        }
        PowerUpKind::Utility(UtilityKind::TimeSlow)
    }

    pub fn color(&self) -> Color {
        match self {
            PowerUpKind::Weapon(w) => w.color(),
            PowerUpKind::Utility(u) => u.color(),
        }
    }
}

impl WeaponKind {
    /// Fire mode this weapon selects, given the current one
    pub fn fire_mode(&self, current: u8) -> u8 {
        match self {
            WeaponKind::DoubleShot => current.max(2),
            WeaponKind::TripleShot => 3,
            WeaponKind::DiagonalSpread => 4,
            WeaponKind::WideSpread => 5,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            WeaponKind::DoubleShot => Color(0xffaa00),
            WeaponKind::TripleShot => Color(0xff00ff),
            WeaponKind::DiagonalSpread => Color(0x00ff88),
            WeaponKind::WideSpread => Color(0xff00aa),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeaponKind::DoubleShot => "Double Shot ⬆⬆",
            WeaponKind::TripleShot => "Triple Shot ⬆⬆⬆",
            WeaponKind::DiagonalSpread => "Diagonal Spread ⬈⬆⬉",
            WeaponKind::WideSpread => "Wide Spread ⬅⬆➡",
        }
    }
}

impl UtilityKind {
    pub fn color(&self) -> Color {
        match self {
            UtilityKind::DoubleSpeed => Color(0xff3333),
            UtilityKind::Immunity => Color(0x00ffff),
            UtilityKind::TimeSlow => Color(0xffff00),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UtilityKind::DoubleSpeed => "Double Speed ⚡",
            UtilityKind::Immunity => "Immunity 🛡️",
            UtilityKind::TimeSlow => "Time Slow ⏰",
        }
    }
}

/// Active power-up effects
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEffects {
    /// Current fire pattern, 1 (single) to 5 (wide spread)
    pub fire_mode: u8,
    pub weapon: Option<WeaponKind>,
    pub utility: Option<UtilityKind>,
    /// Ticks since the last pickup while anything is active
    pub timer: u32,
}

impl Default for ActiveEffects {
    fn default() -> Self {
        Self {
            fire_mode: 1,
            weapon: None,
            utility: None,
            timer: 0,
        }
    }
}

impl ActiveEffects {
    /// Apply a collected power-up and restart the shared countdown
    pub fn activate(&mut self, kind: PowerUpKind) {
        match kind {
            PowerUpKind::Weapon(w) => {
                self.fire_mode = w.fire_mode(self.fire_mode);
                self.weapon = Some(w);
            }
            PowerUpKind::Utility(u) => self.utility = Some(u),
        }
        self.timer = 0;
    }

    pub fn is_active(&self) -> bool {
        self.weapon.is_some() || self.utility.is_some()
    }

    /// Advance the countdown. Returns true on the tick both slots expire.
    pub fn advance(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.timer += 1;
        if self.timer < POWER_UP_DURATION_TICKS {
            return false;
        }
        if self.weapon.take().is_some() {
            self.fire_mode = 1;
        }
        self.utility = None;
        self.timer = 0;
        true
    }

    /// Whole seconds left on the countdown (rounded up)
    pub fn seconds_left(&self) -> u32 {
        POWER_UP_DURATION_TICKS
            .saturating_sub(self.timer)
            .div_ceil(crate::consts::TICKS_PER_SECOND)
    }

    pub fn immune(&self) -> bool {
        self.utility == Some(UtilityKind::Immunity)
    }

    pub fn time_slow(&self) -> bool {
        self.utility == Some(UtilityKind::TimeSlow)
    }

    pub fn double_fire_rate(&self) -> bool {
        self.utility == Some(UtilityKind::DoubleSpeed)
    }

    /// Movement/fire scale for enemies and slowed projectiles
    pub fn slow_factor(&self) -> f32 {
        if self.time_slow() {
            crate::consts::TIME_SLOW_FACTOR
        } else {
            1.0
        }
    }
}
