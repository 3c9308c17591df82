// Poster layout and simulation tuning constants.

// Logical poster (authoring space)
pub const POSTER_WIDTH: f32 = 800.0;
pub const POSTER_HEIGHT: f32 = 1200.0;

// Smallest scale the viewport will report, keeps degenerate surfaces drawable
pub const MIN_SCALE: f32 = 1e-4;

// Petals
pub const PETAL_COUNT: usize = 30;
pub const PETAL_SPEED_MIN: f32 = 1.0;
pub const PETAL_SPEED_SPAN: f32 = 2.0;
pub const PETAL_DRIFT_SPAN: f32 = 2.0; // drift in [-SPAN/2, SPAN/2)
pub const PETAL_SIZE_MIN: f32 = 20.0;
pub const PETAL_SIZE_SPAN: f32 = 20.0;
pub const PETAL_PHASE_STEP: f32 = 0.01; // radians per frame

// Branches
pub const BRANCH_SIZE: f32 = 300.0;
pub const BRANCH_HIT_RADIUS: f32 = 150.0;
pub const BRANCH_EASING: f32 = 0.1; // angle += (target - angle) * k
pub const BRANCH_TILT: f32 = 0.3; // radians
pub const BRANCH_ANCHORS: [[f32; 2]; 3] = [[200.0, 100.0], [400.0, 100.0], [600.0, 100.0]];

// Ambient light
pub const RAY_COUNT: usize = 60;
pub const RAY_LENGTH: f32 = 300.0;
pub const RAY_ROTATION_PER_FRAME: f32 = 0.001;
pub const RAY_WIDTH: f32 = 2.0;
pub const RAY_FLICKER_MIN: f32 = 1.0;
pub const RAY_FLICKER_SPAN: f32 = 2.0;
pub const GLOW_RADIUS: f32 = 40.0;

// Fish groups
pub const MAX_FISH_GROUPS: usize = 2;
pub const FISH_SPAWN_INTERVAL: u64 = 60; // frames
pub const FISH_PER_GROUP_MIN: usize = 5;
pub const FISH_PER_GROUP_MAX: usize = 7;
pub const FISH_SIZE_MIN: f32 = 30.0;
pub const FISH_SIZE_SPAN: f32 = 30.0;
pub const FISH_SPEED_MIN: f32 = 1.0;
pub const FISH_SPEED_SPAN: f32 = 1.0;
pub const FISH_SCHOOL_Y_MIN: f32 = 650.0;
pub const FISH_SCHOOL_Y_SPAN: f32 = 400.0;
pub const FISH_SCATTER_Y: f32 = 60.0;
pub const FISH_SCATTER_X: f32 = 120.0;
pub const FISH_BOB_AMPLITUDE: f32 = 8.0;
pub const FISH_BOB_TIME_RATE: f32 = 2.0;
pub const FISH_BOB_WAVELENGTH: f32 = 0.02;
pub const COLLISION_IMMUNITY_FRAMES: u32 = 300;
pub const COLLISIONS_BEFORE_FLEEING: u32 = 3;
pub const FLEE_ACCELERATION: f32 = 1.05; // per frame, uncapped
pub const FLEE_FADE: f32 = 0.95; // opacity multiplier per frame
pub const FISH_VISIBLE_OPACITY: f32 = 0.05;
