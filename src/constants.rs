// Page wiring and paint styles used by the web frontend.

// DOM
pub const CANVAS_ID: &str = "poster-canvas";
pub const DATA_VARIANT: &str = "variant";
pub const DATA_SEED: &str = "seed";

// Assets
pub const BACKGROUND_URL: &str = "/assets/bg-fuji.jpg";
pub const PETAL_URL: &str = "/assets/sakura.png";
pub const BRANCH_URLS: [&str; 3] = [
    "/assets/branche.png",
    "/assets/branche2.png",
    "/assets/branche3.PNG",
];
pub const FISH_URL: &str = "/assets/koi.png";
pub const BRANCH_SOUND_URL: &str = "/assets/branch-sound.mp3";

// Sun rays
pub const RAY_COLOR_INNER: &str = "rgba(255, 189, 91, 0.3)";
pub const RAY_COLOR_OUTER: &str = "rgba(255, 200, 120, 0)";
pub const GLOW_COLOR_INNER: &str = "rgba(255, 220, 180, 0.4)";
pub const GLOW_COLOR_OUTER: &str = "rgba(255, 220, 180, 0)";

// Warm tint over the whole poster
pub const WASH_COLOR: &str = "rgba(255, 180, 100, 0.4)";
