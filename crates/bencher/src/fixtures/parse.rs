use route_bench::{Fixture, Route};

pub static PARSE_API: Fixture = Fixture::new("Parse", &PARSE_ROUTES);

static PARSE_ROUTES: [Route; 26] = [
    // Objects
    Route::new("POST", "/1/classes/:className"),
    Route::get("/1/classes/:className/:objectId"),
    Route::new("PUT", "/1/classes/:className/:objectId"),
    Route::get("/1/classes/:className"),
    Route::new("DELETE", "/1/classes/:className/:objectId"),

    // Users
    Route::new("POST", "/1/users"),
    Route::get("/1/login"),
    Route::get("/1/users/:objectId"),
    Route::new("PUT", "/1/users/:objectId"),
    Route::get("/1/users"),
    Route::new("DELETE", "/1/users/:objectId"),
    Route::new("POST", "/1/requestPasswordReset"),

    // Roles
    Route::new("POST", "/1/roles"),
    Route::get("/1/roles/:objectId"),
    Route::new("PUT", "/1/roles/:objectId"),
    Route::get("/1/roles"),
    Route::new("DELETE", "/1/roles/:objectId"),

    // Files
    Route::new("POST", "/1/files/:fileName"),

    // Analytics
    Route::new("POST", "/1/events/:eventName"),

    // Push Notifications
    Route::new("POST", "/1/push"),

    // Installations
    Route::new("POST", "/1/installations"),
    Route::get("/1/installations/:objectId"),
    Route::new("PUT", "/1/installations/:objectId"),
    Route::get("/1/installations"),
    Route::new("DELETE", "/1/installations/:objectId"),

    // Cloud Functions
    Route::new("POST", "/1/functions"),
];
