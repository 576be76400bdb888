use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use scalar_colormap::{ColorMap, ColorRange, global_color_map,
                      set_global_color_map};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn colormap(fh: &mut impl Write, map: ColorMap, n: usize,
            width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<RGB8> = map.range(0., 1., n).map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn main() -> Result<(), Err> {
    // An optional argument selects the default palette, e.g. `winter`.
    let prog = env::args().next().unwrap_or_default();
    if let Some(name) = env::args().nth(1) {
        set_global_color_map(name.parse()?);
    }
    let mut fh = BufWriter::new(File::create("colormaps.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>scalar-colormap: test {prog}</title>\n\
                  </head>\n\
                  <body>")?;
    for map in ColorMap::ALL {
        writeln!(fh, "<h3>{map}</h3>")?;
        colormap(&mut fh, map, 10, 43, "")?;
        colormap(&mut fh, map, 30, 13, "")?;
        colormap(&mut fh, map, 150, 1, "")?;
    }

    writeln!(fh, "<h3>Default</h3>")?;
    let default = global_color_map();
    colormap(&mut fh, default, 150, 1, &default.to_string())?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
