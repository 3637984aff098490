mod live_channel;
