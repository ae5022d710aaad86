/// API credentials compiled in at build time, e.g.
/// `OMDB_API_KEY=xxx trunk serve`. A missing required key turns into a
/// configuration error at the provider boundary before any network call.
#[derive(Clone, Copy, PartialEq)]
pub struct Keys {
    pub omdb: Option<&'static str>,
    pub news: Option<&'static str>,
    pub books: Option<&'static str>,
    pub openweather: Option<&'static str>,
    pub google: Option<&'static str>,
    pub google_cx: Option<&'static str>,
}

pub fn keys() -> Keys {
    Keys {
        omdb: option_env!("OMDB_API_KEY"),
        news: option_env!("NEWS_API_KEY"),
        books: option_env!("GOOGLE_BOOKS_API_KEY"),
        openweather: option_env!("OPENWEATHER_API_KEY"),
        google: option_env!("GOOGLE_API_KEY"),
        google_cx: option_env!("GOOGLE_CX_ID"),
    }
}
