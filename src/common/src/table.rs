use std::fs;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::types::OrderRecord;
use crate::types::COLUMNS;

pub fn write_orders<W: io::Write>(w: W, orders: &[OrderRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(w);
    // header goes out even for an empty table
    wtr.write_record(COLUMNS)?;
    for order in orders {
        wtr.serialize(order)?;
    }
    wtr.flush()?;

    Ok(())
}

pub fn read_orders<R: io::Read>(rdr: R) -> Result<Vec<OrderRecord>> {
    let mut rdr = csv::Reader::from_reader(rdr);
    let mut orders = Vec::with_capacity(1000);
    for res in rdr.deserialize() {
        let rec: OrderRecord = res?;
        orders.push(rec);
    }
    orders.shrink_to_fit();

    Ok(orders)
}

pub fn write_orders_to_path(path: &Path, orders: &[OrderRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_orders(File::create(path)?, orders)
}

pub fn read_orders_from_path(path: &Path) -> Result<Vec<OrderRecord>> {
    read_orders(File::open(path)?)
}
