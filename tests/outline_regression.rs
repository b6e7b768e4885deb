//! Regression tests for the flat element dump
//!
//! The outline is the stable text face of the resolver (the CLI prints it,
//! the original preview tool logged the same shape); snapshot it so geometry
//! changes are deliberate.

use uiwarp::{outline, Rect};

#[test]
fn test_outline_menu_document() {
    let out = outline(
        r#"
        grid {
            grid [id: "menu", y: "-150px", width: "100%", height: "150px"] {
                control [id: "play", x: "25%", width: "50%", height: "50px"]
                control [id: "quit", x: "25%", y: "75px", width: "50%", height: "50px"]
            }
        }
    "#,
        Rect::new(0, 0, 800, 600),
    )
    .unwrap();

    insta::assert_snapshot!(out, @r"
    Layout menu: grid pos(0,450) size(800,150)
    Control play: control pos(200,450) size(400,50)
    Control quit: control pos(200,525) size(400,50)
    ");
}

#[test]
fn test_outline_table_document() {
    let out = outline(
        r#"
        grid {
            table [id: "bar", width-cell: 4, height-cell: 1,
                   width: "100%", height: "100%"] {
                control [id: "left", width: "1c", height: "100%"]
                control [id: "mid", x: "1c", width: "2c", height: "100%"]
                control [id: "right", x: "3c", width: "1c", height: "100%"]
            }
        }
    "#,
        Rect::new(0, 0, 800, 600),
    )
    .unwrap();

    insta::assert_snapshot!(out, @r"
    Layout bar: table pos(0,0) size(800,600)
    Control left: control pos(0,0) size(200,600)
    Control mid: control pos(200,0) size(400,600)
    Control right: control pos(600,0) size(200,600)
    ");
}
