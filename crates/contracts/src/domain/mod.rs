pub mod a001_tool_listing;
