//! Static label tables.
//!
//! One entry per named constant, in declaration order. The keycode space
//! is contiguous through `263`; the media-step group that follows sits at
//! `272..=275`, so a keycode's table position is not always its value.
//! The axis and LED spaces carry reserved gaps (`26..=31` and `11..=15`).

/// A named integer constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    pub name: &'static str,
    pub value: i32,
}

const fn label(name: &'static str, value: i32) -> Label {
    Label { name, value }
}

/// Key codes, one per key the input stack can report.
pub static KEYCODES: &[Label] = &[
    label("UNKNOWN", 0),
    label("SOFT_LEFT", 1),
    label("SOFT_RIGHT", 2),
    label("HOME", 3),
    label("BACK", 4),
    label("CALL", 5),
    label("ENDCALL", 6),
    label("0", 7),
    label("1", 8),
    label("2", 9),
    label("3", 10),
    label("4", 11),
    label("5", 12),
    label("6", 13),
    label("7", 14),
    label("8", 15),
    label("9", 16),
    label("STAR", 17),
    label("POUND", 18),
    label("DPAD_UP", 19),
    label("DPAD_DOWN", 20),
    label("DPAD_LEFT", 21),
    label("DPAD_RIGHT", 22),
    label("DPAD_CENTER", 23),
    label("VOLUME_UP", 24),
    label("VOLUME_DOWN", 25),
    label("POWER", 26),
    label("CAMERA", 27),
    label("CLEAR", 28),
    label("A", 29),
    label("B", 30),
    label("C", 31),
    label("D", 32),
    label("E", 33),
    label("F", 34),
    label("G", 35),
    label("H", 36),
    label("I", 37),
    label("J", 38),
    label("K", 39),
    label("L", 40),
    label("M", 41),
    label("N", 42),
    label("O", 43),
    label("P", 44),
    label("Q", 45),
    label("R", 46),
    label("S", 47),
    label("T", 48),
    label("U", 49),
    label("V", 50),
    label("W", 51),
    label("X", 52),
    label("Y", 53),
    label("Z", 54),
    label("COMMA", 55),
    label("PERIOD", 56),
    label("ALT_LEFT", 57),
    label("ALT_RIGHT", 58),
    label("SHIFT_LEFT", 59),
    label("SHIFT_RIGHT", 60),
    label("TAB", 61),
    label("SPACE", 62),
    label("SYM", 63),
    label("EXPLORER", 64),
    label("ENVELOPE", 65),
    label("ENTER", 66),
    label("DEL", 67),
    label("GRAVE", 68),
    label("MINUS", 69),
    label("EQUALS", 70),
    label("LEFT_BRACKET", 71),
    label("RIGHT_BRACKET", 72),
    label("BACKSLASH", 73),
    label("SEMICOLON", 74),
    label("APOSTROPHE", 75),
    label("SLASH", 76),
    label("AT", 77),
    label("NUM", 78),
    label("HEADSETHOOK", 79),
    label("FOCUS", 80),
    label("PLUS", 81),
    label("MENU", 82),
    label("NOTIFICATION", 83),
    label("SEARCH", 84),
    label("MEDIA_PLAY_PAUSE", 85),
    label("MEDIA_STOP", 86),
    label("MEDIA_NEXT", 87),
    label("MEDIA_PREVIOUS", 88),
    label("MEDIA_REWIND", 89),
    label("MEDIA_FAST_FORWARD", 90),
    label("MUTE", 91),
    label("PAGE_UP", 92),
    label("PAGE_DOWN", 93),
    label("PICTSYMBOLS", 94),
    label("SWITCH_CHARSET", 95),
    label("BUTTON_A", 96),
    label("BUTTON_B", 97),
    label("BUTTON_C", 98),
    label("BUTTON_X", 99),
    label("BUTTON_Y", 100),
    label("BUTTON_Z", 101),
    label("BUTTON_L1", 102),
    label("BUTTON_R1", 103),
    label("BUTTON_L2", 104),
    label("BUTTON_R2", 105),
    label("BUTTON_THUMBL", 106),
    label("BUTTON_THUMBR", 107),
    label("BUTTON_START", 108),
    label("BUTTON_SELECT", 109),
    label("BUTTON_MODE", 110),
    label("ESCAPE", 111),
    label("FORWARD_DEL", 112),
    label("CTRL_LEFT", 113),
    label("CTRL_RIGHT", 114),
    label("CAPS_LOCK", 115),
    label("SCROLL_LOCK", 116),
    label("META_LEFT", 117),
    label("META_RIGHT", 118),
    label("FUNCTION", 119),
    label("SYSRQ", 120),
    label("BREAK", 121),
    label("MOVE_HOME", 122),
    label("MOVE_END", 123),
    label("INSERT", 124),
    label("FORWARD", 125),
    label("MEDIA_PLAY", 126),
    label("MEDIA_PAUSE", 127),
    label("MEDIA_CLOSE", 128),
    label("MEDIA_EJECT", 129),
    label("MEDIA_RECORD", 130),
    label("F1", 131),
    label("F2", 132),
    label("F3", 133),
    label("F4", 134),
    label("F5", 135),
    label("F6", 136),
    label("F7", 137),
    label("F8", 138),
    label("F9", 139),
    label("F10", 140),
    label("F11", 141),
    label("F12", 142),
    label("NUM_LOCK", 143),
    label("NUMPAD_0", 144),
    label("NUMPAD_1", 145),
    label("NUMPAD_2", 146),
    label("NUMPAD_3", 147),
    label("NUMPAD_4", 148),
    label("NUMPAD_5", 149),
    label("NUMPAD_6", 150),
    label("NUMPAD_7", 151),
    label("NUMPAD_8", 152),
    label("NUMPAD_9", 153),
    label("NUMPAD_DIVIDE", 154),
    label("NUMPAD_MULTIPLY", 155),
    label("NUMPAD_SUBTRACT", 156),
    label("NUMPAD_ADD", 157),
    label("NUMPAD_DOT", 158),
    label("NUMPAD_COMMA", 159),
    label("NUMPAD_ENTER", 160),
    label("NUMPAD_EQUALS", 161),
    label("NUMPAD_LEFT_PAREN", 162),
    label("NUMPAD_RIGHT_PAREN", 163),
    label("VOLUME_MUTE", 164),
    label("INFO", 165),
    label("CHANNEL_UP", 166),
    label("CHANNEL_DOWN", 167),
    label("ZOOM_IN", 168),
    label("ZOOM_OUT", 169),
    label("TV", 170),
    label("WINDOW", 171),
    label("GUIDE", 172),
    label("DVR", 173),
    label("BOOKMARK", 174),
    label("CAPTIONS", 175),
    label("SETTINGS", 176),
    label("TV_POWER", 177),
    label("TV_INPUT", 178),
    label("STB_POWER", 179),
    label("STB_INPUT", 180),
    label("AVR_POWER", 181),
    label("AVR_INPUT", 182),
    label("PROG_RED", 183),
    label("PROG_GREEN", 184),
    label("PROG_YELLOW", 185),
    label("PROG_BLUE", 186),
    label("APP_SWITCH", 187),
    label("BUTTON_1", 188),
    label("BUTTON_2", 189),
    label("BUTTON_3", 190),
    label("BUTTON_4", 191),
    label("BUTTON_5", 192),
    label("BUTTON_6", 193),
    label("BUTTON_7", 194),
    label("BUTTON_8", 195),
    label("BUTTON_9", 196),
    label("BUTTON_10", 197),
    label("BUTTON_11", 198),
    label("BUTTON_12", 199),
    label("BUTTON_13", 200),
    label("BUTTON_14", 201),
    label("BUTTON_15", 202),
    label("BUTTON_16", 203),
    label("LANGUAGE_SWITCH", 204),
    label("MANNER_MODE", 205),
    label("3D_MODE", 206),
    label("CONTACTS", 207),
    label("CALENDAR", 208),
    label("MUSIC", 209),
    label("CALCULATOR", 210),
    label("ZENKAKU_HANKAKU", 211),
    label("EISU", 212),
    label("MUHENKAN", 213),
    label("HENKAN", 214),
    label("KATAKANA_HIRAGANA", 215),
    label("YEN", 216),
    label("RO", 217),
    label("KANA", 218),
    label("ASSIST", 219),
    label("BRIGHTNESS_DOWN", 220),
    label("BRIGHTNESS_UP", 221),
    label("MEDIA_AUDIO_TRACK", 222),
    label("SLEEP", 223),
    label("WAKEUP", 224),
    label("PAIRING", 225),
    label("MEDIA_TOP_MENU", 226),
    label("11", 227),
    label("12", 228),
    label("LAST_CHANNEL", 229),
    label("TV_DATA_SERVICE", 230),
    label("VOICE_ASSIST", 231),
    label("TV_RADIO_SERVICE", 232),
    label("TV_TELETEXT", 233),
    label("TV_NUMBER_ENTRY", 234),
    label("TV_TERRESTRIAL_ANALOG", 235),
    label("TV_TERRESTRIAL_DIGITAL", 236),
    label("TV_SATELLITE", 237),
    label("TV_SATELLITE_BS", 238),
    label("TV_SATELLITE_CS", 239),
    label("TV_SATELLITE_SERVICE", 240),
    label("TV_NETWORK", 241),
    label("TV_ANTENNA_CABLE", 242),
    label("TV_INPUT_HDMI_1", 243),
    label("TV_INPUT_HDMI_2", 244),
    label("TV_INPUT_HDMI_3", 245),
    label("TV_INPUT_HDMI_4", 246),
    label("TV_INPUT_COMPOSITE_1", 247),
    label("TV_INPUT_COMPOSITE_2", 248),
    label("TV_INPUT_COMPONENT_1", 249),
    label("TV_INPUT_COMPONENT_2", 250),
    label("TV_INPUT_VGA_1", 251),
    label("TV_AUDIO_DESCRIPTION", 252),
    label("TV_AUDIO_DESCRIPTION_MIX_UP", 253),
    label("TV_AUDIO_DESCRIPTION_MIX_DOWN", 254),
    label("TV_ZOOM_MODE", 255),
    label("TV_CONTENTS_MENU", 256),
    label("TV_MEDIA_CONTEXT_MENU", 257),
    label("TV_TIMER_PROGRAMMING", 258),
    label("HELP", 259),
    label("NAVIGATE_PREVIOUS", 260),
    label("NAVIGATE_NEXT", 261),
    label("NAVIGATE_IN", 262),
    label("NAVIGATE_OUT", 263),
    label("MEDIA_SKIP_FORWARD", 272),
    label("MEDIA_SKIP_BACKWARD", 273),
    label("MEDIA_STEP_FORWARD", 274),
    label("MEDIA_STEP_BACKWARD", 275),
];

/// Motion axes reported alongside pointer and joystick events.
pub static AXES: &[Label] = &[
    label("X", 0),
    label("Y", 1),
    label("PRESSURE", 2),
    label("SIZE", 3),
    label("TOUCH_MAJOR", 4),
    label("TOUCH_MINOR", 5),
    label("TOOL_MAJOR", 6),
    label("TOOL_MINOR", 7),
    label("ORIENTATION", 8),
    label("VSCROLL", 9),
    label("HSCROLL", 10),
    label("Z", 11),
    label("RX", 12),
    label("RY", 13),
    label("RZ", 14),
    label("HAT_X", 15),
    label("HAT_Y", 16),
    label("LTRIGGER", 17),
    label("RTRIGGER", 18),
    label("THROTTLE", 19),
    label("RUDDER", 20),
    label("WHEEL", 21),
    label("GAS", 22),
    label("BRAKE", 23),
    label("DISTANCE", 24),
    label("TILT", 25),
    label("GENERIC_1", 32),
    label("GENERIC_2", 33),
    label("GENERIC_3", 34),
    label("GENERIC_4", 35),
    label("GENERIC_5", 36),
    label("GENERIC_6", 37),
    label("GENERIC_7", 38),
    label("GENERIC_8", 39),
    label("GENERIC_9", 40),
    label("GENERIC_10", 41),
    label("GENERIC_11", 42),
    label("GENERIC_12", 43),
    label("GENERIC_13", 44),
    label("GENERIC_14", 45),
    label("GENERIC_15", 46),
    label("GENERIC_16", 47),
];

/// Indicator LEDs a device may expose.
pub static LEDS: &[Label] = &[
    label("NUM_LOCK", 0),
    label("CAPS_LOCK", 1),
    label("SCROLL_LOCK", 2),
    label("COMPOSE", 3),
    label("KANA", 4),
    label("SLEEP", 5),
    label("SUSPEND", 6),
    label("MUTE", 7),
    label("MISC", 8),
    label("MAIL", 9),
    label("CHARGING", 10),
    label("CONTROLLER_1", 16),
    label("CONTROLLER_2", 17),
    label("CONTROLLER_3", 18),
    label("CONTROLLER_4", 19),
];

/// Policy flags attached to dispatched key events.
pub static FLAGS: &[Label] = &[
    label("VIRTUAL", 0x2),
    label("FUNCTION", 0x4),
    label("GESTURE", 0x8),
    label("WAKE", 0x1),
];
