//! `RouteParser` is a helper class that turns request paths into
//! type-safe route handles with captured params

use regex::Regex;

/// Converts captured route params into a route handle
type ParamsConverter<R> = Box<Fn(Vec<&str>) -> Option<R>>;

/// Router class maps regex patterns to a type-safe list of routes, defined by `R`
pub struct RouteParser<R> {
    routes: Vec<(Regex, ParamsConverter<R>)>,
}

impl<R> RouteParser<R> {
    /// Adds mapping between regex and route without params
    pub fn add_route<F>(&mut self, regex_pattern: &str, route: F) -> &mut Self
    where
        F: Fn() -> R + 'static,
    {
        self.add_route_with_params(regex_pattern, move |_| Some(route()))
    }

    /// Adds mapping between regex and route with params converter
    pub fn add_route_with_params<F>(&mut self, regex_pattern: &str, converter: F) -> &mut Self
    where
        F: Fn(Vec<&str>) -> Option<R> + 'static,
    {
        let regex = Regex::new(regex_pattern).expect("Invalid regex pattern in route");
        self.routes.push((regex, Box::new(converter)));
        self
    }

    /// Tests provided path against all registered routes.
    /// Returns the first route matched.
    pub fn test(&self, path: &str) -> Option<R> {
        self.routes
            .iter()
            .filter_map(|&(ref regex, ref converter)| Self::get_matches(regex, path).and_then(|params| converter(params)))
            .next()
    }

    fn get_matches<'a>(regex: &Regex, path: &'a str) -> Option<Vec<&'a str>> {
        regex.captures(path).map(|captures| {
            captures
                .iter()
                .skip(1)
                .filter_map(|maybe_match| maybe_match.map(|m| m.as_str()))
                .collect::<Vec<_>>()
        })
    }
}

impl<R> Default for RouteParser<R> {
    fn default() -> Self {
        RouteParser { routes: Vec::new() }
    }
}
