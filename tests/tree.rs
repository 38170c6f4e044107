//! Pins down the matching policy: which route wins when several could
//! match, and in which order candidates are tried.

use trailhead::{MatchError, Router};

struct MatchTest {
    routes: &'static [&'static str],
    cases: &'static [(&'static str, Option<&'static str>)],
}

impl MatchTest {
    fn run(self) {
        let mut router = Router::new();
        for route in self.routes {
            router.map("GET", route, *route).unwrap();
        }

        for (path, expected) in self.cases {
            match router.resolve("GET", path) {
                Ok(matched) => assert_eq!(Some(*matched.route.handler()), *expected, "{path}"),
                Err(MatchError::NotFound) => assert_eq!(None, *expected, "{path}"),
            }
        }
    }
}

#[test]
fn literal_beats_parameter_at_every_depth() {
    MatchTest {
        routes: &["/{id}", "/page", "/users/{id}/posts", "/users/all/posts"],
        cases: &[
            ("/page", Some("/page")),
            ("/other", Some("/{id}")),
            ("/users/all/posts", Some("/users/all/posts")),
            ("/users/7/posts", Some("/users/{id}/posts")),
        ],
    }
    .run()
}

#[test]
fn parameters_tried_in_registration_order() {
    MatchTest {
        routes: &["/{first}", "/{second}"],
        cases: &[("/value", Some("/{first}"))],
    }
    .run()
}

#[test]
fn dead_end_falls_back_to_next_candidate() {
    MatchTest {
        routes: &["/x/static/end", "/x/{p}/other"],
        cases: &[
            ("/x/static/end", Some("/x/static/end")),
            // the static branch matches `static` but has no `other` child
            ("/x/static/other", Some("/x/{p}/other")),
            ("/x/static/neither", None),
        ],
    }
    .run()
}

#[test]
fn wildcard_matches_last() {
    MatchTest {
        routes: &["/files/*", "/files/readme", "/files/{name}"],
        cases: &[
            ("/files/readme", Some("/files/readme")),
            ("/files/other", Some("/files/{name}")),
            ("/files/a/b/c", Some("/files/*")),
            ("/files/", Some("/files/*")),
            ("/files", None),
        ],
    }
    .run()
}

#[test]
fn trailing_slash_is_significant() {
    MatchTest {
        routes: &["/page", "/dir/"],
        cases: &[
            ("/page", Some("/page")),
            ("/page/", None),
            ("/dir/", Some("/dir/")),
            ("/dir", None),
        ],
    }
    .run()
}

#[test]
fn empty_segment_prefers_static_over_optional() {
    MatchTest {
        routes: &["/page/{id?}", "/page/"],
        cases: &[
            // the explicit trailing-slash route is a static empty segment,
            // which outranks the optional parameter
            ("/page/", Some("/page/")),
            ("/page/13", Some("/page/{id?}")),
        ],
    }
    .run()
}

#[test]
fn required_parameter_rejects_empty_segment() {
    MatchTest {
        routes: &["/users/{id}"],
        cases: &[("/users/", None), ("/users/13", Some("/users/{id}"))],
    }
    .run()
}

#[test]
fn constrained_parameter_rejects_and_releases_to_sibling() {
    let mut router = Router::new();
    router.define("id", "[0-9]+");
    router.map("GET", "/poly/{id}", "id").unwrap();
    router.map("GET", "/poly/{word}", "word").unwrap();

    assert_eq!(*router.resolve("GET", "/poly/13").unwrap().route.handler(), "id");
    assert_eq!(*router.resolve("GET", "/poly/abc").unwrap().route.handler(), "word");
}

#[test]
fn deep_backtracking_across_constraints() {
    let mut router = Router::new();
    router.define("num", "[0-9]+");
    router.map("GET", "/v/{num}/edit", "edit-num").unwrap();
    router.map("GET", "/v/{slug}/show", "show-slug").unwrap();

    // `{num}` accepts `13` but dead-ends at `show`; the lookup backs out
    // and retries through `{slug}`
    assert_eq!(*router.resolve("GET", "/v/13/show").unwrap().route.handler(), "show-slug");
    assert_eq!(*router.resolve("GET", "/v/13/edit").unwrap().route.handler(), "edit-num");
    assert_eq!(
        router.resolve("GET", "/v/abc/edit").unwrap_err(),
        MatchError::NotFound
    );
}

#[test]
fn methods_do_not_bleed_into_each_other() {
    let mut router = Router::new();
    router.map("GET", "/same", "get").unwrap();
    router.map("POST", "/same", "post").unwrap();

    assert_eq!(*router.resolve("GET", "/same").unwrap().route.handler(), "get");
    assert_eq!(*router.resolve("POST", "/same").unwrap().route.handler(), "post");
    assert_eq!(router.resolve("PUT", "/same").unwrap_err(), MatchError::NotFound);
}
