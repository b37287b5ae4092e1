//! High-traffic platforms and hosts that are rarely useful crawl targets.
//!
//! Entries are registrable labels: `google` covers `google.com`,
//! `google.co.uk` and so on.

pub const DENYLIST: &[&str] = &[
    "akamai",
    "aliexpress",
    "amazon",
    "amazonaws",
    "amzn",
    "baidu",
    "bit",
    "bongacams",
    "chaturbate",
    "cloudfront",
    "delicious",
    "digg",
    "ebay",
    "ebay-kleinanzeigen",
    "facebook",
    "feedburner",
    "flickr",
    "gettyimages",
    "gmx",
    "google",
    "gravatar",
    "http",
    "imgur",
    "immobilienscout24",
    "instagr",
    "instagram",
    "last",
    "linkedin",
    "live",
    "livejasmin",
    "localhost",
    "mail",
    "netflix",
    "ok",
    "otto",
    "paypal",
    "pinterest",
    "pornhub",
    "postbank",
    "qq",
    "reddit",
    "sina",
    "sohu",
    "soundcloud",
    "taobao",
    "telegram",
    "tiktok",
    "tmall",
    "twitch",
    "twitpic",
    "twitter",
    "txxx",
    "vimeo",
    "vk",
    "vkontakte",
    "web",
    "weibo",
    "whatsapp",
    "xhamster",
    "xvideos",
    "yahoo",
    "yandex",
    "youtu",
    "youtube",
    "zoom",
];
