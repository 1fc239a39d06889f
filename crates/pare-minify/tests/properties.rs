use pare_minify::{minify, minify_css, minify_js};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Acme Consulting</title>
    <!-- Global styles -->
    <style>
        /* Reset */
        * { box-sizing: border-box; }

        body {
            margin: 0;
            font-family: "Inter", sans-serif;
        }

        .hero h1 , .hero h2 {
            color: #112233;
        }
    </style>
    <!--[if lt IE 9]><script src="html5shiv.js"></script><![endif]-->
    <script type="application/ld+json">{ "@context" : "https://schema.org", "@type" : "Organization" }</script>
</head>
<body>
    <section class="hero" style="padding: 2rem 1rem;  background: #fff;">
        <h1>We   build
            websites</h1>
        <button id="cta" type="button">Get in touch</button>
    </section>

    <script>
        // Open the contact form
        var button = document.getElementById('cta');
        button.addEventListener('click', function () {
            /* scroll to the form */
            document.querySelector('#contact').scrollIntoView({ behavior: 'smooth' });
        });
    </script>
</body>
</html>
"#;

#[test_log::test]
fn test_landing_page() {
    let out = minify(LANDING_PAGE);

    assert!(out.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
    assert!(out.contains(
        "<style>*{box-sizing:border-box}body{margin:0;font-family:\"Inter\",sans-serif}.hero h1,.hero h2{color:#112233}</style>"
    ));
    assert!(out.contains(r#"<!--[if lt IE 9]><script src="html5shiv.js"></script><![endif]-->"#));
    assert!(out.contains(
        r#"<script type="application/ld+json">{ "@context" : "https://schema.org", "@type" : "Organization" }</script>"#
    ));
    assert!(out.contains(r#"<section class="hero" style="padding:2rem 1rem;background:#fff">"#));
    assert!(out.contains("<h1>We build websites</h1>"));
    assert!(out.contains(
        "<script>var button=document.getElementById('cta');button.addEventListener('click',function(){document.querySelector('#contact').scrollIntoView({behavior: 'smooth'});});</script>"
    ));
    assert!(!out.contains("Global styles"));
    assert!(!out.contains('\n'));
    assert!(out.ends_with("</body></html>"));
}

#[test_log::test]
fn test_idempotent() {
    let samples = [
        LANDING_PAGE,
        "<div>\n   <span>x</span>\n</div>",
        "<p style=\"color: red;  \">a <!-- b --> c</p>",
        "<style>.a { color: red;; }</style>",
        "<p style=\"color: red;;\">x</p>",
        "",
    ];
    for sample in samples {
        let once = minify(sample);
        assert_eq!(minify(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn test_comment_removal() {
    let out = minify("<p>a</p><!-- note --><p>b</p>");
    assert_eq!(out, "<p>a</p><p>b</p>");
}

#[test]
fn test_conditional_comment_preserved() {
    let span = "<!--[if IE]><p class=\"legacy\">Upgrade your browser</p><![endif]-->";
    let out = minify(&format!("<body>\n{span}\n</body>"));
    assert_eq!(out, format!("<body>{span}</body>"));
}

#[test]
fn test_structured_script_preserved() {
    let block = r#"<script type="application/ld+json">{ "a" : 1 }</script>"#;
    let out = minify(&format!("<head>\n  {block}\n</head>"));
    assert!(out.contains(block));
}

#[test]
fn test_css_collapse() {
    let css = ".a  {\n  color :  red; /* brand */\n  margin:  0px ;\n}";
    assert_eq!(minify_css(css), ".a{color:red;margin:0px}");
}

#[test]
fn test_tag_adjacency_collapse() {
    assert_eq!(
        minify("<div>\n   <span>x</span>\n</div>"),
        "<div><span>x</span></div>"
    );
}

#[test]
fn test_inline_style_rewrap() {
    assert_eq!(
        minify(r#"<span style="color: red;  ">x</span>"#),
        r#"<span style="color:red">x</span>"#
    );
}

#[test]
fn test_never_expands() {
    let samples = [
        LANDING_PAGE,
        "<style></style><script></script>",
        "<style>a{}</style>",
        "<!--[if IE]>",
        "<!-- unterminated",
        "<p style=\"\">x</p>",
        "plain   text\n\n",
        "<script>if (a < b) { c(); } // end</script>",
    ];
    for sample in samples {
        assert!(
            minify(sample).len() <= sample.len(),
            "output longer than input for {sample:?}"
        );
        assert!(minify_css(sample).len() <= sample.len());
        assert!(minify_js(sample).len() <= sample.len());
    }
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| minify(LANDING_PAGE)))
        .collect();
    let expected = minify(LANDING_PAGE);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
