macro_rules! v1_path {
    ($path:literal) => {
        concat!("/api/v1", $path)
    };
}

/// Versioned API route definitions shared by the server and its clients.
pub mod v1 {
    pub const SEARCH: &str = v1_path!("/search");
    pub const RECENTLY_ADDED: &str = v1_path!("/recently_added");

    pub mod movies {
        pub const COLLECTION: &str = v1_path!("/movies");
        pub const SEARCH: &str = v1_path!("/movies/search");
        pub const RECENTLY_ADDED: &str = v1_path!("/movies/recently_added");
        pub const INFO: &str = v1_path!("/movies/info/{title}");
        pub const GENRES: &str = v1_path!("/movies/{id}/genres");
        pub const ACTORS: &str = v1_path!("/movies/{id}/actors");
    }

    pub mod tv_shows {
        pub const COLLECTION: &str = v1_path!("/tv_shows");
        pub const SEARCH: &str = v1_path!("/tv_shows/search");
        pub const RECENTLY_ADDED: &str = v1_path!("/tv_shows/recently_added");
        pub const INFO: &str = v1_path!("/tv_shows/info/{title}");
        pub const GENRES: &str = v1_path!("/tv_shows/{id}/genres");
        pub const ACTORS: &str = v1_path!("/tv_shows/{id}/actors");
        pub const SEASONS: &str = v1_path!("/tv_shows/{id}/seasons");
        pub const EPISODES: &str =
            v1_path!("/tv_shows/{id}/seasons/{season}/episodes");
    }

    pub mod actors {
        pub const COLLECTION: &str = v1_path!("/actors");
    }

    pub mod genres {
        pub const COLLECTION: &str = v1_path!("/genres");
    }
}

/// Response headers carrying pagination metadata.
pub mod headers {
    pub const CURRENT_PAGE: &str = "current_page";
    pub const MAX_PAGES: &str = "max_pages";
}

pub mod utils {
    /// Replace a single path parameter (e.g. `"{title}"`) with the provided
    /// value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        route.replace(param, value.as_ref())
    }
}
