use route_bench::{Fixture, Route};

pub static GITHUB_API: Fixture = Fixture::new("GitHub", &GITHUB_ROUTES);

static GITHUB_ROUTES: [Route; 203] = [
    // OAuth Authorizations
    Route::get("/authorizations"),
    Route::get("/authorizations/:id"),
    Route::new("POST", "/authorizations"),
    Route::new("DELETE", "/authorizations/:id"),
    Route::get("/applications/:client_id/tokens/:access_token"),
    Route::new("DELETE", "/applications/:client_id/tokens"),
    Route::new("DELETE", "/applications/:client_id/tokens/:access_token"),

    // Activity
    Route::get("/events"),
    Route::get("/repos/:owner/:repo/events"),
    Route::get("/networks/:owner/:repo/events"),
    Route::get("/orgs/:org/events"),
    Route::get("/users/:user/received_events"),
    Route::get("/users/:user/received_events/public"),
    Route::get("/users/:user/events"),
    Route::get("/users/:user/events/public"),
    Route::get("/users/:user/events/orgs/:org"),
    Route::get("/feeds"),
    Route::get("/notifications"),
    Route::get("/repos/:owner/:repo/notifications"),
    Route::new("PUT", "/notifications"),
    Route::new("PUT", "/repos/:owner/:repo/notifications"),
    Route::get("/notifications/threads/:id"),
    Route::get("/notifications/threads/:id/subscription"),
    Route::new("PUT", "/notifications/threads/:id/subscription"),
    Route::new("DELETE", "/notifications/threads/:id/subscription"),
    Route::get("/repos/:owner/:repo/stargazers"),
    Route::get("/users/:user/starred"),
    Route::get("/user/starred"),
    Route::get("/user/starred/:owner/:repo"),
    Route::new("PUT", "/user/starred/:owner/:repo"),
    Route::new("DELETE", "/user/starred/:owner/:repo"),
    Route::get("/repos/:owner/:repo/subscribers"),
    Route::get("/users/:user/subscriptions"),
    Route::get("/user/subscriptions"),
    Route::get("/repos/:owner/:repo/subscription"),
    Route::new("PUT", "/repos/:owner/:repo/subscription"),
    Route::new("DELETE", "/repos/:owner/:repo/subscription"),
    Route::get("/user/subscriptions/:owner/:repo"),
    Route::new("PUT", "/user/subscriptions/:owner/:repo"),
    Route::new("DELETE", "/user/subscriptions/:owner/:repo"),

    // Gists
    Route::get("/users/:user/gists"),
    Route::get("/gists"),
    Route::get("/gists/:id"),
    Route::new("POST", "/gists"),
    Route::new("PUT", "/gists/:id/star"),
    Route::new("DELETE", "/gists/:id/star"),
    Route::get("/gists/:id/star"),
    Route::new("POST", "/gists/:id/forks"),
    Route::new("DELETE", "/gists/:id"),

    // Git Data
    Route::get("/repos/:owner/:repo/git/blobs/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/blobs"),
    Route::get("/repos/:owner/:repo/git/commits/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/commits"),
    Route::get("/repos/:owner/:repo/git/refs"),
    Route::new("POST", "/repos/:owner/:repo/git/refs"),
    Route::get("/repos/:owner/:repo/git/tags/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/tags"),
    Route::get("/repos/:owner/:repo/git/trees/:sha"),
    Route::new("POST", "/repos/:owner/:repo/git/trees"),

    // Issues
    Route::get("/issues"),
    Route::get("/user/issues"),
    Route::get("/orgs/:org/issues"),
    Route::get("/repos/:owner/:repo/issues"),
    Route::get("/repos/:owner/:repo/issues/:number"),
    Route::new("POST", "/repos/:owner/:repo/issues"),
    Route::get("/repos/:owner/:repo/assignees"),
    Route::get("/repos/:owner/:repo/assignees/:assignee"),
    Route::get("/repos/:owner/:repo/issues/:number/comments"),
    Route::new("POST", "/repos/:owner/:repo/issues/:number/comments"),
    Route::get("/repos/:owner/:repo/issues/:number/events"),
    Route::get("/repos/:owner/:repo/labels"),
    Route::get("/repos/:owner/:repo/labels/:name"),
    Route::new("POST", "/repos/:owner/:repo/labels"),
    Route::new("DELETE", "/repos/:owner/:repo/labels/:name"),
    Route::get("/repos/:owner/:repo/issues/:number/labels"),
    Route::new("POST", "/repos/:owner/:repo/issues/:number/labels"),
    Route::new("DELETE", "/repos/:owner/:repo/issues/:number/labels/:name"),
    Route::new("PUT", "/repos/:owner/:repo/issues/:number/labels"),
    Route::new("DELETE", "/repos/:owner/:repo/issues/:number/labels"),
    Route::get("/repos/:owner/:repo/milestones/:number/labels"),
    Route::get("/repos/:owner/:repo/milestones"),
    Route::get("/repos/:owner/:repo/milestones/:number"),
    Route::new("POST", "/repos/:owner/:repo/milestones"),
    Route::new("DELETE", "/repos/:owner/:repo/milestones/:number"),

    // Miscellaneous
    Route::get("/emojis"),
    Route::get("/gitignore/templates"),
    Route::get("/gitignore/templates/:name"),
    Route::new("POST", "/markdown"),
    Route::new("POST", "/markdown/raw"),
    Route::get("/meta"),
    Route::get("/rate_limit"),

    // Organizations
    Route::get("/users/:user/orgs"),
    Route::get("/user/orgs"),
    Route::get("/orgs/:org"),
    Route::get("/orgs/:org/members"),
    Route::get("/orgs/:org/members/:user"),
    Route::new("DELETE", "/orgs/:org/members/:user"),
    Route::get("/orgs/:org/public_members"),
    Route::get("/orgs/:org/public_members/:user"),
    Route::new("PUT", "/orgs/:org/public_members/:user"),
    Route::new("DELETE", "/orgs/:org/public_members/:user"),
    Route::get("/orgs/:org/teams"),
    Route::get("/teams/:id"),
    Route::new("POST", "/orgs/:org/teams"),
    Route::new("DELETE", "/teams/:id"),
    Route::get("/teams/:id/members"),
    Route::get("/teams/:id/members/:user"),
    Route::new("PUT", "/teams/:id/members/:user"),
    Route::new("DELETE", "/teams/:id/members/:user"),
    Route::get("/teams/:id/repos"),
    Route::get("/teams/:id/repos/:owner/:repo"),
    Route::new("PUT", "/teams/:id/repos/:owner/:repo"),
    Route::new("DELETE", "/teams/:id/repos/:owner/:repo"),
    Route::get("/user/teams"),

    // Pull Requests
    Route::get("/repos/:owner/:repo/pulls"),
    Route::get("/repos/:owner/:repo/pulls/:number"),
    Route::new("POST", "/repos/:owner/:repo/pulls"),
    Route::get("/repos/:owner/:repo/pulls/:number/commits"),
    Route::get("/repos/:owner/:repo/pulls/:number/files"),
    Route::get("/repos/:owner/:repo/pulls/:number/merge"),
    Route::new("PUT", "/repos/:owner/:repo/pulls/:number/merge"),
    Route::get("/repos/:owner/:repo/pulls/:number/comments"),
    Route::new("PUT", "/repos/:owner/:repo/pulls/:number/comments"),

    // Repositories
    Route::get("/user/repos"),
    Route::get("/users/:user/repos"),
    Route::get("/orgs/:org/repos"),
    Route::get("/repositories"),
    Route::new("POST", "/user/repos"),
    Route::new("POST", "/orgs/:org/repos"),
    Route::get("/repos/:owner/:repo"),
    Route::get("/repos/:owner/:repo/contributors"),
    Route::get("/repos/:owner/:repo/languages"),
    Route::get("/repos/:owner/:repo/teams"),
    Route::get("/repos/:owner/:repo/tags"),
    Route::get("/repos/:owner/:repo/branches"),
    Route::get("/repos/:owner/:repo/branches/:branch"),
    Route::new("DELETE", "/repos/:owner/:repo"),
    Route::get("/repos/:owner/:repo/collaborators"),
    Route::get("/repos/:owner/:repo/collaborators/:user"),
    Route::new("PUT", "/repos/:owner/:repo/collaborators/:user"),
    Route::new("DELETE", "/repos/:owner/:repo/collaborators/:user"),
    Route::get("/repos/:owner/:repo/comments"),
    Route::get("/repos/:owner/:repo/commits/:sha/comments"),
    Route::new("POST", "/repos/:owner/:repo/commits/:sha/comments"),
    Route::get("/repos/:owner/:repo/comments/:id"),
    Route::new("DELETE", "/repos/:owner/:repo/comments/:id"),
    Route::get("/repos/:owner/:repo/commits"),
    Route::get("/repos/:owner/:repo/commits/:sha"),
    Route::get("/repos/:owner/:repo/readme"),
    Route::get("/repos/:owner/:repo/keys"),
    Route::get("/repos/:owner/:repo/keys/:id"),
    Route::new("POST", "/repos/:owner/:repo/keys"),
    Route::new("DELETE", "/repos/:owner/:repo/keys/:id"),
    Route::get("/repos/:owner/:repo/downloads"),
    Route::get("/repos/:owner/:repo/downloads/:id"),
    Route::new("DELETE", "/repos/:owner/:repo/downloads/:id"),
    Route::get("/repos/:owner/:repo/forks"),
    Route::new("POST", "/repos/:owner/:repo/forks"),
    Route::get("/repos/:owner/:repo/hooks"),
    Route::get("/repos/:owner/:repo/hooks/:id"),
    Route::new("POST", "/repos/:owner/:repo/hooks"),
    Route::new("POST", "/repos/:owner/:repo/hooks/:id/tests"),
    Route::new("DELETE", "/repos/:owner/:repo/hooks/:id"),
    Route::new("POST", "/repos/:owner/:repo/merges"),
    Route::get("/repos/:owner/:repo/releases"),
    Route::get("/repos/:owner/:repo/releases/:id"),
    Route::new("POST", "/repos/:owner/:repo/releases"),
    Route::new("DELETE", "/repos/:owner/:repo/releases/:id"),
    Route::get("/repos/:owner/:repo/releases/:id/assets"),
    Route::get("/repos/:owner/:repo/stats/contributors"),
    Route::get("/repos/:owner/:repo/stats/commit_activity"),
    Route::get("/repos/:owner/:repo/stats/code_frequency"),
    Route::get("/repos/:owner/:repo/stats/participation"),
    Route::get("/repos/:owner/:repo/stats/punch_card"),
    Route::get("/repos/:owner/:repo/statuses/:ref"),
    Route::new("POST", "/repos/:owner/:repo/statuses/:ref"),

    // Search
    Route::get("/search/repositories"),
    Route::get("/search/code"),
    Route::get("/search/issues"),
    Route::get("/search/users"),
    Route::get("/legacy/issues/search/:owner/:repository/:state/:keyword"),
    Route::get("/legacy/repos/search/:keyword"),
    Route::get("/legacy/user/search/:keyword"),
    Route::get("/legacy/user/email/:email"),

    // Users
    Route::get("/users/:user"),
    Route::get("/user"),
    Route::get("/users"),
    Route::get("/user/emails"),
    Route::new("POST", "/user/emails"),
    Route::new("DELETE", "/user/emails"),
    Route::get("/users/:user/followers"),
    Route::get("/user/followers"),
    Route::get("/users/:user/following"),
    Route::get("/user/following"),
    Route::get("/user/following/:user"),
    Route::get("/users/:user/following/:target_user"),
    Route::new("PUT", "/user/following/:user"),
    Route::new("DELETE", "/user/following/:user"),
    Route::get("/users/:user/keys"),
    Route::get("/user/keys"),
    Route::get("/user/keys/:id"),
    Route::new("POST", "/user/keys"),
    Route::new("DELETE", "/user/keys/:id"),
];
