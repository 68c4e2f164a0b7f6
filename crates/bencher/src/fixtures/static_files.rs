use route_bench::{Fixture, Route};

pub static STATIC_ROUTES: Fixture = Fixture::new("Static", &ROUTES);

static ROUTES: [Route; 157] = [
    Route::get("/"),
    Route::get("/cmd.html"),
    Route::get("/code.html"),
    Route::get("/contrib.html"),
    Route::get("/contribute.html"),
    Route::get("/debugging_with_gdb.html"),
    Route::get("/docs.html"),
    Route::get("/effective_go.html"),
    Route::get("/files.log"),
    Route::get("/gccgo_contribute.html"),
    Route::get("/gccgo_install.html"),
    Route::get("/go-logo-black.png"),
    Route::get("/go-logo-blue.png"),
    Route::get("/go-logo-white.png"),
    Route::get("/go1.1.html"),
    Route::get("/go1.2.html"),
    Route::get("/go1.html"),
    Route::get("/go1compat.html"),
    Route::get("/go_faq.html"),
    Route::get("/go_mem.html"),
    Route::get("/go_spec.html"),
    Route::get("/help.html"),
    Route::get("/ie.css"),
    Route::get("/install-source.html"),
    Route::get("/install.html"),
    Route::get("/logo-153x55.png"),
    Route::get("/Makefile"),
    Route::get("/root.html"),
    Route::get("/share.png"),
    Route::get("/sieve.gif"),
    Route::get("/tos.html"),
    Route::get("/articles"),
    Route::get("/articles/go_command.html"),
    Route::get("/articles/index.html"),
    Route::get("/articles/wiki"),
    Route::get("/articles/wiki/edit.html"),
    Route::get("/articles/wiki/final-noclosure.go"),
    Route::get("/articles/wiki/final-noerror.go"),
    Route::get("/articles/wiki/final-parsetemplate.go"),
    Route::get("/articles/wiki/final-template.go"),
    Route::get("/articles/wiki/final.go"),
    Route::get("/articles/wiki/get.go"),
    Route::get("/articles/wiki/http-sample.go"),
    Route::get("/articles/wiki/index.html"),
    Route::get("/articles/wiki/Makefile"),
    Route::get("/articles/wiki/notemplate.go"),
    Route::get("/articles/wiki/part1-noerror.go"),
    Route::get("/articles/wiki/part1.go"),
    Route::get("/articles/wiki/part2.go"),
    Route::get("/articles/wiki/part3-errorhandling.go"),
    Route::get("/articles/wiki/part3.go"),
    Route::get("/articles/wiki/test.bash"),
    Route::get("/articles/wiki/test_edit.good"),
    Route::get("/articles/wiki/test_Test.txt.good"),
    Route::get("/articles/wiki/test_view.good"),
    Route::get("/articles/wiki/view.html"),
    Route::get("/codewalk"),
    Route::get("/codewalk/codewalk.css"),
    Route::get("/codewalk/codewalk.js"),
    Route::get("/codewalk/codewalk.xml"),
    Route::get("/codewalk/functions.xml"),
    Route::get("/codewalk/markov.go"),
    Route::get("/codewalk/markov.xml"),
    Route::get("/codewalk/pig.go"),
    Route::get("/codewalk/popout.png"),
    Route::get("/codewalk/run"),
    Route::get("/codewalk/sharemem.xml"),
    Route::get("/codewalk/urlpoll.go"),
    Route::get("/devel"),
    Route::get("/devel/release.html"),
    Route::get("/devel/weekly.html"),
    Route::get("/gopher"),
    Route::get("/gopher/appenginegopher.jpg"),
    Route::get("/gopher/appenginegophercolor.jpg"),
    Route::get("/gopher/appenginelogo.gif"),
    Route::get("/gopher/bumper.png"),
    Route::get("/gopher/bumper192x108.png"),
    Route::get("/gopher/bumper320x180.png"),
    Route::get("/gopher/bumper480x270.png"),
    Route::get("/gopher/bumper640x360.png"),
    Route::get("/gopher/doc.png"),
    Route::get("/gopher/frontpage.png"),
    Route::get("/gopher/gopherbw.png"),
    Route::get("/gopher/gophercolor.png"),
    Route::get("/gopher/gophercolor16x16.png"),
    Route::get("/gopher/help.png"),
    Route::get("/gopher/pkg.png"),
    Route::get("/gopher/project.png"),
    Route::get("/gopher/ref.png"),
    Route::get("/gopher/run.png"),
    Route::get("/gopher/talks.png"),
    Route::get("/gopher/pencil"),
    Route::get("/gopher/pencil/gopherhat.jpg"),
    Route::get("/gopher/pencil/gopherhelmet.jpg"),
    Route::get("/gopher/pencil/gophermega.jpg"),
    Route::get("/gopher/pencil/gopherrunning.jpg"),
    Route::get("/gopher/pencil/gopherswim.jpg"),
    Route::get("/gopher/pencil/gopherswrench.jpg"),
    Route::get("/play"),
    Route::get("/play/fib.go"),
    Route::get("/play/hello.go"),
    Route::get("/play/life.go"),
    Route::get("/play/peano.go"),
    Route::get("/play/pi.go"),
    Route::get("/play/sieve.go"),
    Route::get("/play/solitaire.go"),
    Route::get("/play/tree.go"),
    Route::get("/progs"),
    Route::get("/progs/cgo1.go"),
    Route::get("/progs/cgo2.go"),
    Route::get("/progs/cgo3.go"),
    Route::get("/progs/cgo4.go"),
    Route::get("/progs/defer.go"),
    Route::get("/progs/defer.out"),
    Route::get("/progs/defer2.go"),
    Route::get("/progs/defer2.out"),
    Route::get("/progs/eff_bytesize.go"),
    Route::get("/progs/eff_bytesize.out"),
    Route::get("/progs/eff_qr.go"),
    Route::get("/progs/eff_sequence.go"),
    Route::get("/progs/eff_sequence.out"),
    Route::get("/progs/eff_unused1.go"),
    Route::get("/progs/eff_unused2.go"),
    Route::get("/progs/error.go"),
    Route::get("/progs/error2.go"),
    Route::get("/progs/error3.go"),
    Route::get("/progs/error4.go"),
    Route::get("/progs/go1.go"),
    Route::get("/progs/gobs1.go"),
    Route::get("/progs/gobs2.go"),
    Route::get("/progs/image_draw.go"),
    Route::get("/progs/image_package1.go"),
    Route::get("/progs/image_package1.out"),
    Route::get("/progs/image_package2.go"),
    Route::get("/progs/image_package2.out"),
    Route::get("/progs/image_package3.go"),
    Route::get("/progs/image_package3.out"),
    Route::get("/progs/image_package4.go"),
    Route::get("/progs/image_package4.out"),
    Route::get("/progs/image_package5.go"),
    Route::get("/progs/image_package5.out"),
    Route::get("/progs/image_package6.go"),
    Route::get("/progs/image_package6.out"),
    Route::get("/progs/interface.go"),
    Route::get("/progs/interface2.go"),
    Route::get("/progs/interface2.out"),
    Route::get("/progs/json1.go"),
    Route::get("/progs/json2.go"),
    Route::get("/progs/json2.out"),
    Route::get("/progs/json3.go"),
    Route::get("/progs/json4.go"),
    Route::get("/progs/json5.go"),
    Route::get("/progs/run"),
    Route::get("/progs/slices.go"),
    Route::get("/progs/timeout1.go"),
    Route::get("/progs/timeout2.go"),
    Route::get("/progs/update.bash"),
];
