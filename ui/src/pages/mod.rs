pub mod books;
pub mod codeforces;
pub mod github;
pub mod home;
pub mod movies;
pub mod news;
pub mod not_found;
pub mod search;

pub use books::BooksPage;
pub use codeforces::CodeforcesPage;
pub use github::GithubPage;
pub use home::HomePage;
pub use movies::MoviesPage;
pub use news::NewsPage;
pub use not_found::NotFoundPage;
pub use search::SearchPage;
