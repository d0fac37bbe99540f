//! Button icons
//!
//! Raw big-endian RGB565 images rendered by `build.rs`.

use tumble_core::ui::IconId;
use tumble_display::{IconSet, Pixmap};

macro_rules! icon {
    ($name:literal, $width:expr, $height:expr) => {
        Pixmap::new(
            $width,
            $height,
            include_bytes!(concat!(env!("OUT_DIR"), "/icons/", $name, ".rgb565")),
        )
    };
}

const WATER: Pixmap = icon!("water", 60, 60);
const RECYCLE_WATER: Pixmap = icon!("recycle_water", 60, 60);
const WASH: Pixmap = icon!("wash", 60, 60);
const TUMBLE_DRY: Pixmap = icon!("tumble_dry", 60, 60);
const PLAY: Pixmap = icon!("play", 100, 80);
const BACKWARD: Pixmap = icon!("backward", 100, 80);
const FORWARD: Pixmap = icon!("forward", 100, 80);
const LOCKED: Pixmap = icon!("locked", 60, 60);
const UNLOCKED: Pixmap = icon!("unlocked", 60, 60);

const _: () = {
    assert!(WATER.is_well_formed());
    assert!(RECYCLE_WATER.is_well_formed());
    assert!(WASH.is_well_formed());
    assert!(TUMBLE_DRY.is_well_formed());
    assert!(PLAY.is_well_formed());
    assert!(BACKWARD.is_well_formed());
    assert!(FORWARD.is_well_formed());
    assert!(LOCKED.is_well_formed());
    assert!(UNLOCKED.is_well_formed());
};

/// Icons stored in flash
pub struct PanelIcons;

impl IconSet for PanelIcons {
    fn icon(&self, id: IconId) -> Pixmap {
        match id {
            IconId::Water => WATER,
            IconId::RecycleWater => RECYCLE_WATER,
            IconId::Wash => WASH,
            IconId::TumbleDry => TUMBLE_DRY,
            IconId::Play => PLAY,
            IconId::Backward => BACKWARD,
            IconId::Forward => FORWARD,
            IconId::Locked => LOCKED,
            IconId::Unlocked => UNLOCKED,
        }
    }
}
