//! Server-rendered game page.
//!
//! The page drives the whole game over query parameters: control links and a
//! small keyboard-capture script both reload `/?key=...`, and the server
//! renders the resulting state. The board text only ever contains the four
//! cell symbols, so it can be inlined into the markup as-is.

pub fn render_page(board: &str, status: &str, state_json: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Snake</title>
<style>
body {{ font-family: monospace; margin: 2em; }}
pre.board {{ font-size: 2em; line-height: 1; letter-spacing: 0.5em; }}
.controls a {{ margin-right: 1em; }}
</style>
</head>
<body>
<h1>Snake</h1>
<pre class="board">{board}</pre>
<p>{status}</p>
<p class="controls">
<a href="/?key=up">Up</a>
<a href="/?key=down">Down</a>
<a href="/?key=left">Left</a>
<a href="/?key=right">Right</a>
<a href="/?key=r">Restart</a>
</p>
<p>Arrow keys and WASD work too. Every accepted move advances the snake.</p>
<pre>{state_json}</pre>
<script>
document.addEventListener("keydown", (event) => {{
  const keys = {{
    ArrowUp: "up", ArrowDown: "down", ArrowLeft: "left", ArrowRight: "right",
    w: "up", s: "down", a: "left", d: "right", r: "r",
  }};
  const key = keys[event.key];
  if (key) {{
    window.location = "/?key=" + key;
  }}
}});
</script>
</body>
</html>
"#
    )
}
