//! Built-in templates and modifier phrases.

pub(super) const ANIMAL: &[&str] = &[
    "Your smile is like a dolphin's - it somehow makes everyone around you happier.",
    "You have the determination of a honey badger trying to get the last drop of honey.",
    "Your laugh is like a penguin's waddle - unexpectedly delightful and impossible not to love.",
    "Your energy reminds me of a hummingbird - vibrant, quick, and somehow defying the laws of physics.",
    "Your loyalty is like that of an elephant - deep, unwavering, and something people talk about for generations.",
    "Your creativity flows like an octopus changing colors - fluid, surprising, and captivating to watch.",
    "Your adaptability is like a chameleon's - seamless, impressive, and always perfectly suited to the situation.",
    "Your problem-solving skills are like a crow using tools - unexpectedly sophisticated and worthy of scientific study.",
    "You're as tenacious as a terrier with a new toy - persistent, focused, and adorably determined.",
    "Your memory is like an elephant's - impressive, reliable, and sometimes surprising even to yourself.",
    "Your resilience is like a tardigrade - able to survive incredible challenges while staying remarkably cheerful.",
    "Your presence is like a therapy dog - somehow making everyone feel better just by being there.",
];

pub(super) const OBJECT: &[&str] = &[
    "Your creativity is like a Swiss Army knife that somehow also includes a cappuccino maker.",
    "Your problem-solving skills are like a vintage calculator - reliable, impressive, and somehow cooler than the newer models.",
    "Your style is like that perfect corner piece in a jigsaw puzzle - distinctive and exactly where it needs to be.",
    "Your ideas are like those fancy Japanese pencils everyone covets but nobody actually buys.",
    "Your presence in a room is like finding an Easter egg in a video game - unexpected and delightful.",
    "Your attention to detail is like a perfectly aligned bookshelf - satisfying in ways that most people wouldn't even notice.",
    "Your thoughtfulness is like finding the perfect playlist already made for the exact mood you're in.",
    "Your reliability is like that one pen that never runs out of ink, even though you've had it for years.",
    "Your mind works like a Rubik's cube solver - handling complexity with fascinating precision.",
    "Your ability to focus is like noise-canceling headphones in a busy coffee shop.",
    "Your organization skills are like a perfectly packed suitcase where everything fits just right.",
    "Your laughter is like finding the perfect meme at exactly the right moment.",
];

pub(super) const SKILL: &[&str] = &[
    "The way you remember song lyrics is like having a musical library card catalog in your brain.",
    "Your ability to parallel park would make a NASA engineer jealous of your spatial awareness.",
    "The way you explain complex topics makes Wikipedia entries look unnecessarily verbose.",
    "Your talent for finding the perfect GIF for any situation should be studied by communication experts.",
    "The way you can identify any song within three seconds would put Shazam out of business.",
    "Your knack for remembering people's coffee orders makes baristas question their career choices.",
    "Your ability to find the perfect word is like having a thesaurus that also knows the exact emotional context needed.",
    "The way you navigate social situations is like watching a master chess player who's thinking ten moves ahead.",
    "Your knack for finding shortcuts in apps that even the developers forgot about is eerily impressive.",
    "Your gift for remembering obscure trivia would make you the ultimate phone-a-friend lifeline.",
    "Your talent for perfectly timing jokes in conversation should be studied by comedians.",
    "The way you can eyeball measurements while cooking puts measuring cups to shame.",
];

pub(super) const RANDOM: &[&str] = &[
    "Your enthusiasm is like finding an extra french fry at the bottom of the bag - unexpected and delightful.",
    "Your sense of humor is like finding the perfect avocado - rare, precious, and worth celebrating.",
    "Your kindness is like a phone that never needs charging - reliable, powerful, and always there when needed.",
    "Your taste in music is like a perfectly curated playlist that somehow knows exactly what mood I'm in.",
    "Your cooking skills are like that one local restaurant that never advertises but always has a line out the door.",
    "Your text messages are like those rare YouTube videos with zero ads - refreshing and worth waiting for.",
    "Your fashion sense is like the perfect amount of hot sauce - bold enough to be noticed, but never overwhelming.",
    "Your advice is like finding money in an old jacket pocket - unexpected, valuable, and exactly what I needed.",
    "Your perspective is like that one documentary that completely changes how you see the world.",
    "Your organization skills are like the satisfaction of watching those videos where they power-wash dirty surfaces.",
    "Your imagination is like a Swiss Army knife with tools nobody knew existed but everyone suddenly needs.",
    "Your dedication is like those people who build elaborate domino patterns - meticulous, patient, and impressive to witness.",
    "Your unique perspective is like finding a hidden track on your favorite album - unexpected and instantly valuable.",
    "Your voice is like the perfect podcast host - engaging enough that I could listen to you explain anything.",
    "Your way of thinking is like those satisfying cooking videos where everything is precisely measured and perfectly timed.",
    "Your conversation skills are like finding a TV show with zero bad episodes - consistently excellent.",
];

pub(super) const LOW: &[&str] = &[
    "quite nice",
    "rather pleasant",
    "generally impressive",
    "noticeably good",
    "rather charming",
    "decidedly pleasant",
];

pub(super) const MEDIUM: &[&str] = &[
    "remarkably impressive",
    "distinctly unique",
    "particularly fascinating",
    "wonderfully distinctive",
    "genuinely outstanding",
];

pub(super) const HIGH: &[&str] = &[
    "extraordinarily exceptional",
    "mind-blowingly impressive",
    "absolutely unparalleled",
    "genuinely world-class",
    "profoundly awe-inspiring",
];
