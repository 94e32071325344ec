// Rating engine constants
pub const DEFAULT_RATING: i32 = 1500;
pub const ELO_DIVISOR: f64 = 400.0;
pub const RATING_GAIN_MULTIPLIER: f64 = 70.0;
pub const SUB_2000_CEILING: i32 = 2000;
pub const SUB_2000_BONUS: i32 = 10;
pub const BOTH_PHYSICS_BONUS: i32 = 5;
pub const RATING_FLOOR: i32 = 1700;
// Top-3 bonus ranges, scaled between a field of 3 and a field of 30 players
pub const BONUS_FIELD_BASE: f64 = 3.0;
pub const BONUS_FIELD_RANGE: f64 = 27.0;
pub const FIRST_PLACE_BONUS: (f64, f64) = (15.0, 50.0);
pub const SECOND_PLACE_BONUS: (f64, f64) = (10.0, 30.0);
pub const THIRD_PLACE_BONUS: (f64, f64) = (5.0, 20.0);

// Point system constants
pub const EE_MAX_POINTS: f64 = 1000.0;
pub const K2_FLOOR: f64 = 0.01;
pub const SDC_POINT_BUDGET: f64 = 20.0;
// EE curve values at places 1..=5
pub const EE_ALMERA_TOP_PLACES: [f64; 5] = [1.0, 0.97, 0.94, 0.92, 0.9];
pub const EE_KOZ_TOP_PLACES: [f64; 5] = [1.0, 0.98, 0.965, 0.953, 0.942];
pub const EE_DFWC_TOP_PLACES: [f64; 5] = [1.0, 0.99, 0.98, 0.97, 0.96];

// Multicup constants
pub const ONLINE_CUP_ROUNDS: usize = 5;
// Worst-round subtraction only kicks in above this many played rounds
pub const ROUNDS_BEFORE_DROP: usize = 3;
