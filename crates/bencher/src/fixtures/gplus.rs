use route_bench::{Fixture, Route};

pub static GPLUS_API: Fixture = Fixture::new("GPlus", &GPLUS_ROUTES);

static GPLUS_ROUTES: [Route; 13] = [
    // People
    Route::get("/people/:userId"),
    Route::get("/people"),
    Route::get("/activities/:activityId/people/:collection"),
    Route::get("/people/:userId/people/:collection"),
    Route::get("/people/:userId/openIdConnect"),

    // Activities
    Route::get("/people/:userId/activities/:collection"),
    Route::get("/activities/:activityId"),
    Route::get("/activities"),

    // Comments
    Route::get("/activities/:activityId/comments"),
    Route::get("/comments/:commentId"),

    // Moments
    Route::new("POST", "/people/:userId/moments/:collection"),
    Route::get("/people/:userId/moments/:collection"),
    Route::new("DELETE", "/moments/:id"),
];
