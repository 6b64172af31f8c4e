//! `/post` and `/more`: a long page plus an endpoint serving more body text.

use axum::response::Html;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad \
minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea \
commodo consequat.";

fn lorem_paragraphs(n: usize) -> String {
    (0..n).map(|_| format!("<p>{LOREM}</p>")).collect()
}

pub async fn show_post() -> Html<String> {
    Html(format!(
        r#"<h1>A very long post</h1>
<div class="body">{}</div>
<button id="load">Load More</button>
<script src="https://code.jquery.com/jquery-3.3.1.min.js"></script>
<script type="text/javascript">
$(function() {{
    $('#load').click(function() {{
        $.ajax({{
            url: '/more',
            type: 'get',
            success: function(data){{
                $('.body').append(data);
            }}
        }})
    }})
}})
</script>"#,
        lorem_paragraphs(2)
    ))
}

pub async fn load_more() -> Html<String> {
    Html(lorem_paragraphs(1))
}
