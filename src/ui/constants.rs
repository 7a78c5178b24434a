// ui/constants.rs

pub const ART: &str = r#"
        .         \|/          .            \|/        .
   \|/      .    --*--   \|/        .      --*--
  --*--         .  /|\  --*--   .    \|/    /|\    .
   /|\   .  \\  |  //    /|\        --*--        \|/
        .    \\ | //  .        .     /|\    .   --*--
   .      \\  \\|//  //    .                     /|\
      .    \\__\|/__//   .     \\  |  //   .
  ~~~~~~~~~~~~~|~~~~~~~~~~~~~~~~~\\ | //~~~~~~~~~~~~~
"#;

pub const TITLE: &str = r#" ___ _           _        ___     _ _        _
/ __| |_ _ _ __ _(_)_ _   / __|___| | |___ __| |_ ___ _ _
\__ \  _| '_/ _` | | ' \ | (__/ _ \ | / -_) _|  _/ _ \ '_|
|___/\__|_| \__,_|_|_||_| \___\___/_|_\___\__|\__\___/_|
"#;

pub const MAIN_MENU_HINT: &str = "Move with ↑↓ or jk, select with Enter or a number. Press q to quit.";
pub const EXPLORE_HINT: &str =
    "s: search (10 energy)  r: rest  ↑↓: pick destination  Enter: travel (15 energy)  Tab: switch tab  Esc: menu";
pub const BROWSE_HINT: &str = "Tab/Shift-Tab or 1-3: switch tab  Esc: menu";
pub const TRAIL_HINT: &str = "Use arrow keys to move. Find the special spots! Esc: menu";
