use std::env;
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let file_path = env::args().nth(1).ok_or("Missing file path")?;
    let root = simplexml_dom::XmlElement::from_reader(File::open(file_path)?)?;
    for element in root.all_children() {
        dbg!(element.xpath());
    }
    print!("{}", root.set_pretty_xml(true));
    Ok(())
}
