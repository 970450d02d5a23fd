pub mod a001_supplier;
pub mod a002_product;
pub mod a003_rfq;
pub mod a004_deletion_request;
pub mod a005_material_inquiry;
pub mod a006_product_inquiry;
pub mod a007_auto_reply;
pub mod a008_lead;
pub mod a009_automation_order;
pub mod a010_email_campaign;
pub mod a011_inventory;
pub mod a012_pricing;
