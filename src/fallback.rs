// src/fallback.rs — CSV 资源缺失时使用的内置表情数据

/// 内置组合：(名称, 表情串)
pub const FALLBACK_COMBINATIONS: &[(&str, &str)] = &[
    ("Tech Hub", "💻📶🌐"),
    ("Signal Strong", "📡⚡🔥"),
    ("Network Master", "🔗💾🎮"),
    ("Digital Space", "🌐💻📱"),
    ("WiFi Zone", "📶🔗💡"),
    ("Space Station", "🚀🛰️🌌"),
    ("Galaxy Network", "🌌⭐🌑"),
    ("Rocket WiFi", "🚀⚡💨"),
    ("Astronaut Zone", "👨‍🚀🛰️🌌"),
    ("Cosmic Signal", "⭐🌌📡"),
    ("Gaming Hub", "🎮🎵🎧"),
    ("Game Zone", "🎮⚔️🛡️"),
    ("Player One", "🎮👾🤖"),
    ("Gaming Station", "🎮🎸🎤"),
    ("Arcade WiFi", "🎮💾🔫"),
    ("Music Studio", "🎵🎧🎤"),
    ("Rock WiFi", "🎸🤘🎵"),
    ("Sound Wave", "🎵🌊🎧"),
    ("Music Zone", "🎤🎸🎵"),
    ("Audio Hub", "🎧🎵🎤"),
    ("Nature WiFi", "🌲🌻🌱"),
    ("Forest Signal", "🌲🏞️🌿"),
    ("Garden Network", "🌻🌱🌿"),
    ("Tree WiFi", "🌲🌳🌱"),
    ("Natural Zone", "🌿🌻🌱"),
    ("Food Network", "🍕🍔🍟"),
    ("Pizza WiFi", "🍕🍕🍕"),
    ("Burger Zone", "🍔🍟🥤"),
    ("Snack Hub", "🍟🍕🍰"),
    ("Foodie WiFi", "🍕🍔🍰"),
    ("Cool Zone", "😎🔥⚡"),
    ("Stylish WiFi", "😎💎✨"),
    ("Awesome Network", "😎👍🔥"),
    ("Epic WiFi", "🔥⚡💥"),
    ("Legendary Zone", "👑⚡🔥"),
    ("Dark Network", "🖤🌑👻"),
    ("Ghost WiFi", "👻💀🖤"),
    ("Mystery Zone", "🔮🌑👻"),
    ("Shadow Network", "🖤🌑👻"),
    ("Night WiFi", "🌙⭐👻"),
    ("Dark Vader", "🖤🤖⚔️"),
    ("Fun Zone", "😄🎉🎈"),
    ("Happy WiFi", "😊🌈✨"),
    ("Party Network", "🎉🎊🎈"),
    ("Joy Zone", "😄😊🎉"),
    ("Smile WiFi", "😊💖✨"),
    ("Cat Zone", "🐱😸🐾"),
    ("Dog WiFi", "🐶🐕🐾"),
    ("Panda Paradise", "🐼🎋🎍"),
    ("Animal Kingdom", "🐱🐶🐼"),
    ("Pet Network", "🐾🐱🐶"),
    ("Storm WiFi", "⛈️⚡🌧️"),
    ("Sunny Zone", "☀️🌞🌻"),
    ("Rainbow Network", "🌈☀️🌧️"),
    ("Weather Hub", "🌤️⛈️🌈"),
    ("Sky WiFi", "☁️🌤️🌈"),
    ("Love Zone", "💖💕💗"),
    ("Heart WiFi", "❤️💙💚"),
    ("Sweet Network", "💖🍰💕"),
    ("Romance Zone", "💕💖💗"),
    ("Love Hub", "❤️💕💖"),
    ("Power Zone", "⚡🔥💥"),
    ("Energy WiFi", "⚡🔋💡"),
    ("Lightning Fast", "⚡💨🚀"),
    ("Power Hub", "⚡🔥💥"),
    ("Energy Zone", "🔋⚡💡"),
    ("Simple WiFi", "✨💫⭐"),
    ("Clean Zone", "🤍✨💫"),
    ("Pure Network", "🤍💫✨"),
    ("Minimal WiFi", "✨🤍💫"),
    ("Clear Zone", "💫✨🤍"),
];

/// 内置单个表情池
pub const FALLBACK_SINGLES: &[&str] = &[
    "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🤣", "😊", "😇", "🙂", "🙃", "😉", "😌", "😍",
    "🥰", "😘", "😋", "😛", "😜", "🤪", "🤨", "🧐", "🤓", "😎", "🤩", "🥳", "😏", "😤", "😈",
    "👿", "💀", "👻", "👽", "🤖", "🤡", "👹", "👺", "😺", "😸", "🙌", "👏", "👋", "✋", "🖖",
    "👌", "✌️", "🤞", "🤟", "🤘", "🤙", "👍", "👎", "✊", "👊", "🙏", "💅", "👀", "🧠", "🦸",
    "🦹", "🧙", "🧚", "🧛", "🧜", "🧝", "🧞", "🧟", "🐵", "🐒", "🦍", "🐶", "🐕", "🐺", "🦊",
    "🦝", "🐱", "🐈", "🦁", "🐯", "🐅", "🐆", "🐴", "🦄", "🦓", "🦌", "🐮", "🐷", "🐗", "🐏",
    "🐑", "🐐", "🐪", "🦒", "🐘", "🦏", "🦛", "🐭", "🐹", "🐰", "🐿️", "🦇", "🐻", "🐨", "🐼",
    "🦥", "🦦", "🦘", "🐾", "🦃", "🐔", "🐣", "🐧", "🕊️", "🦅", "🦆", "🦢", "🦉", "🐸", "🐊",
    "🐢", "🐍", "🦎", "🦖", "🦕", "🐳", "🐋", "🐬", "🐟", "🐠", "🐡", "🦈", "🐙", "🐚", "🐌",
    "🦋", "🐛", "🐜", "🐝", "🐞", "🦗", "🕷️", "🦂", "💐", "🌸", "🌹", "🥀", "🌺", "🌻", "🌷",
    "🌱", "🌲", "🌳", "🌴", "🌵", "🌾", "🌿", "🍀", "🍁", "🍂", "🍃", "🍇", "🍉", "🍊", "🍋",
    "🍌", "🍍", "🥭", "🍎", "🍐", "🍑", "🍒", "🍓", "🥝", "🍅", "🥥", "🥑", "🍆", "🥕", "🌽",
    "🌶️", "🍄", "🥜", "🍞", "🥐", "🧀", "🍔", "🍟", "🍕", "🌭", "🌮", "🌯", "🍝", "🍜", "🍣",
    "🍩", "🍪", "🎂", "🍰", "🍫", "🍬", "🍭", "☕", "🍵", "🥤", "🍺", "🍹", "🧊", "🌍", "🌋",
    "🏝️", "🏰", "🗽", "🗼", "🚂", "🚗", "🚲", "🛸", "🚀", "🛰️", "✈️", "⛵", "⚓", "⌚", "📱",
    "💻", "⌨️", "🖥️", "💾", "💿", "🔭", "🔬", "💡", "🔦", "🔋", "🔌", "🔧", "🔨", "⚙️", "⚔️",
    "🛡️", "🏹", "💰", "💎", "📦", "🔔", "📚", "📌", "🔒", "🔑", "🗝️", "🎈", "🎁", "🎉", "🎊",
    "🪄", "🎵", "🎶", "🎤", "🎧", "🎷", "🎸", "🎹", "🎺", "🥁", "🎬", "🎨", "🎲", "🎮", "🕹️",
    "🌟", "⭐", "☀️", "🌙", "☁️", "🌧️", "❄️", "🔥", "💧", "🌈", "❤️", "🧡", "💛", "💚", "💙",
    "💜", "🖤", "🤍", "💯", "📶", "📡", "🌐", "🔗", "⚡",
];

/// 内置描述表（仅在 single.csv 缺失时使用）
pub const FALLBACK_DESCRIPTIONS: &[(&str, &str)] = &[
    ("📶", "Antenna Bars"),
    ("📡", "Satellite Antenna"),
    ("💻", "Laptop"),
    ("📱", "Mobile Phone"),
    ("🌐", "Globe"),
    ("🔗", "Link"),
    ("💾", "Floppy Disk"),
    ("🎮", "Video Game"),
    ("🚀", "Rocket"),
    ("🛰️", "Satellite"),
    ("🌌", "Milky Way"),
    ("🌑", "New Moon"),
    ("⭐", "Star"),
    ("👨‍🚀", "Astronaut"),
    ("🤖", "Robot"),
    ("👾", "Alien Monster"),
    ("⚔️", "Crossed Swords"),
    ("🛡️", "Shield"),
    ("💥", "Collision"),
    ("🖤", "Black Heart"),
    ("❤️", "Red Heart"),
    ("💙", "Blue Heart"),
    ("💚", "Green Heart"),
    ("💜", "Purple Heart"),
    ("🤍", "White Heart"),
    ("🎵", "Musical Note"),
    ("🎧", "Headphone"),
    ("🎤", "Microphone"),
    ("🎸", "Guitar"),
    ("🍕", "Pizza"),
    ("🍔", "Hamburger"),
    ("🍟", "French Fries"),
    ("🍰", "Shortcake"),
    ("🌲", "Evergreen Tree"),
    ("🌻", "Sunflower"),
    ("🐱", "Cat Face"),
    ("🐶", "Dog Face"),
    ("🐼", "Panda Face"),
    ("💡", "Light Bulb"),
    ("🔑", "Key"),
    ("🔒", "Locked"),
    ("⚡", "High Voltage"),
    ("🔥", "Fire"),
    ("❄️", "Snowflake"),
    ("🌈", "Rainbow"),
    ("😎", "Sunglasses"),
    ("🤓", "Nerd Face"),
    ("😈", "Devil"),
    ("👻", "Ghost"),
    ("💀", "Skull"),
    ("👍", "Thumbs Up"),
    ("✌️", "Peace Sign"),
    ("🤘", "Rock On"),
    ("👊", "Fist"),
    ("🧠", "Brain"),
    ("🌱", "Seedling"),
    ("🔬", "Microscope"),
];
