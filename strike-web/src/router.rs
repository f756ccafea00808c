use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Booking,
    #[at("/confirmation")]
    Confirmation,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn routes_round_trip_through_paths() {
        for route in [Route::Booking, Route::Confirmation, Route::NotFound] {
            let path = route.to_path();
            assert_eq!(Route::recognize(&path), Some(route));
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::recognize("/lanes/7"), Some(Route::NotFound));
        assert_eq!(Route::Confirmation.to_path(), "/confirmation");
    }
}
